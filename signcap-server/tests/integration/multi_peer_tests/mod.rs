mod test_peer_leaves_others_stay;
mod test_second_peer_join_notifies_first;
