use crate::notify::{Kind, Notifier, Scope};
use crate::view::{ActivityCard, ViewState};
use std::fmt::Write;

/// Project the view state, plus any visible notices, to a text screen for
/// the terminal. Purely a presentation of `ViewState`; no data lives here.
pub async fn render_screen(view: &ViewState, notices: &Notifier) -> String {
    let mut out = String::new();

    if let Some(notice) = notices.visible(&Scope::Global).await {
        let _ = writeln!(out, "[{}] {}", kind_label(notice.kind), notice.text);
    }

    if !view.is_populated() {
        out.push_str("No activities loaded.\n");
        return out;
    }

    for (name, card) in &view.cards {
        render_card(&mut out, name, card);
        if let Some(notice) = notices.visible(&Scope::Activity(name.clone())).await {
            let _ = writeln!(out, "  [{}] {}", kind_label(notice.kind), notice.text);
        }
        out.push('\n');
    }

    out
}

fn render_card(out: &mut String, name: &str, card: &ActivityCard) {
    let _ = writeln!(out, "{name}");
    let _ = writeln!(out, "  {}", card.description);
    let _ = writeln!(out, "  Schedule: {}", card.schedule);
    let _ = writeln!(out, "  Availability: {} spots left", card.availability);
    let _ = writeln!(
        out,
        "  Participants ({}/{}):",
        card.count, card.max_participants
    );
    if card.rows.is_empty() {
        let _ = writeln!(out, "    (no participants yet)");
    }
    for row in &card.rows {
        let marker = if row.pending { " (pending)" } else { "" };
        let _ = writeln!(out, "    - {}{marker}", row.email);
    }
}

fn kind_label(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "ok",
        Kind::Error => "error",
    }
}
