//! Plain-text rendering of replies.
use client_frontend_core::{Embed, Reply};

/// Render a reply for a terminal. Embeds become a title line followed by
/// their description, fields and image.
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Text(text) => text.clone(),
        Reply::Embed(embed) => render_embed(embed),
    }
}

fn render_embed(embed: &Embed) -> String {
    let mut lines = vec![format!("== {} ==", embed.title)];

    if let Some(description) = &embed.description {
        lines.push(description.clone());
    }

    for field in &embed.fields {
        let name = field.name.trim_matches('\u{200b}');
        if name.is_empty() {
            lines.push(field.value.clone());
        } else {
            lines.push(format!("{}: {}", name, field.value));
        }
    }

    if let Some(image) = &embed.image {
        lines.push(format!("[image] {}", image));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use client_frontend_core::Color;

    use super::*;

    #[test]
    fn text_is_passed_through() {
        assert_eq!(render_reply(&Reply::text("hello")), "hello");
    }

    #[test]
    fn embed_layout() {
        let embed = Embed::new("📜 List of Bosses", Color::Blue)
            .field("\u{200b}", "Hornet\nNosk", true)
            .field("!ff", "Forfeit the current game.", false)
            .image(Some("https://img/x.png"));

        assert_eq!(
            render_reply(&embed.into()),
            "== 📜 List of Bosses ==\nHornet\nNosk\n!ff: Forfeit the current game.\n[image] https://img/x.png"
        );
    }
}
