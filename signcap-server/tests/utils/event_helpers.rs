use serde_json::json;
use signcap_core::ClientEvent;

pub fn join(room: &str, name: &str, email: &str) -> ClientEvent {
    ClientEvent::Join {
        room_id: room.into(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

pub fn leave(room: &str) -> ClientEvent {
    ClientEvent::Leave {
        room_id: room.into(),
    }
}

pub fn offer(room: &str, sdp: &str, from: Option<&str>) -> ClientEvent {
    ClientEvent::Offer {
        room_id: room.into(),
        offer: json!({ "type": "offer", "sdp": sdp }),
        from: from.map(String::from),
    }
}

pub fn ice(room: &str, candidate: &str, from: Option<&str>) -> ClientEvent {
    ClientEvent::Ice {
        room_id: room.into(),
        candidate: json!({ "candidate": candidate }),
        from: from.map(String::from),
    }
}

pub fn chat(room: &str, text: &str, sender: &str) -> ClientEvent {
    ClientEvent::Chat {
        room_id: room.into(),
        text: text.to_string(),
        sender: sender.to_string(),
    }
}

pub fn caption(room: &str, text: &str, lang: &str) -> ClientEvent {
    ClientEvent::Caption {
        room_id: room.into(),
        text: text.to_string(),
        lang: lang.to_string(),
    }
}
