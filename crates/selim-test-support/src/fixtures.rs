//! Dialog datasets shared across crate tests, in the authoring format.

/// Two-node chain: `Hi` then `Bye`.
pub const INTRO_DIALOG_JSON: &str = r#"{
  "intro": [
    { "id": 1, "speaker": "A", "text": "Hi", "portrait": "", "next": 2 },
    { "id": 2, "speaker": "A", "text": "Bye", "portrait": "", "next": null }
  ]
}"#;

/// A chain whose second hop points at an id that does not exist.
pub const DANGLING_DIALOG_JSON: &str = r#"{
  "broken": [
    { "id": 1, "speaker": "Wizard", "text": "Follow me", "portrait": "madwizard1", "next": 99 }
  ]
}"#;

/// Nodes listed out of traversal order, with portraits.
pub const SHUFFLED_DIALOG_JSON: &str = r#"{
  "shuffled": [
    { "id": 10, "speaker": "Wizard", "text": "First", "portrait": "madwizard1", "next": 30 },
    { "id": 20, "speaker": "Student", "text": "Third", "portrait": "student", "next": null },
    { "id": 30, "speaker": "Prof", "text": "Second", "portrait": "prof2", "next": 20 }
  ],
  "solo": [
    { "id": 1, "speaker": "Narrator", "text": "", "portrait": "", "next": null }
  ]
}"#;
