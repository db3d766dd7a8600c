//! Module: codec::join
//! Responsibility: place scalar encodings side by side for compound keys.
//! Does not own: per-component ordering (see `codec::scalar`).

use crate::{
    codec::scalar::{TAG_TEXT, push_component},
    config::{ComponentJoin, ESCAPE_MARKER, KeyCodecConfig},
    key::KeyComponent,
};

/// Encode components in order, separated by the configured joiner.
pub(super) fn push_compound(out: &mut String, components: &[KeyComponent], config: &KeyCodecConfig) {
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            out.push_str(&config.joiner);
        }
        push_joined_component(out, component, config);
    }
}

// Only text can carry the joiner; numbers and timestamps never contain it
// because config validation keeps joiners out of their alphabet.
fn push_joined_component(out: &mut String, component: &KeyComponent, config: &KeyCodecConfig) {
    match (component, config.component_join, config.joiner_lead()) {
        (KeyComponent::Text(text), ComponentJoin::Escaped, Some(lead)) => {
            out.push(TAG_TEXT);
            push_escaped_text(out, text, lead);
        }
        _ => push_component(out, component, config.non_finite),
    }
}

fn push_escaped_text(out: &mut String, text: &str, lead: char) {
    for ch in text.chars() {
        out.push(ch);
        if ch == lead {
            out.push(ESCAPE_MARKER);
        }
    }
}
