//! Needs / Objections / Desires / Pain Points quadrant parsing.

use crate::sections::items_longer_than;
use crate::types::Nopd;

const QUADRANT_LABELS: [&str; 4] = ["NEEDS", "OBJECTIONS", "DESIRES", "PAIN POINTS"];
const MIN_ITEM_CHARS: usize = 5;

#[derive(Clone, Copy)]
enum Quadrant {
    Summary,
    Needs,
    Objections,
    Desires,
    PainPoints,
}

fn quadrant_of(line: &str) -> Option<Quadrant> {
    let trimmed = line.trim();
    let idx = QUADRANT_LABELS
        .iter()
        .position(|label| label.eq_ignore_ascii_case(trimmed))?;
    Some(match idx {
        0 => Quadrant::Needs,
        1 => Quadrant::Objections,
        2 => Quadrant::Desires,
        _ => Quadrant::PainPoints,
    })
}

/// Parses an audience-profile section. Text before the first quadrant label
/// is the summary; each quadrant's items are its paragraphs, in order.
/// Fragments of five characters or fewer are dropped as slide debris.
#[must_use]
pub fn parse_nopd(text: &str) -> Nopd {
    let mut nopd = Nopd::default();
    let mut current = Quadrant::Summary;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(next) = quadrant_of(line) {
            store(&mut nopd, current, &buffer.join("\n"));
            buffer.clear();
            current = next;
        } else {
            buffer.push(line);
        }
    }
    store(&mut nopd, current, &buffer.join("\n"));
    nopd
}

fn store(nopd: &mut Nopd, quadrant: Quadrant, body: &str) {
    let target = match quadrant {
        Quadrant::Summary => {
            if nopd.summary.is_empty() {
                nopd.summary = body.trim().to_string();
            }
            return;
        }
        Quadrant::Needs => &mut nopd.needs,
        Quadrant::Objections => &mut nopd.objections,
        Quadrant::Desires => &mut nopd.desires,
        Quadrant::PainPoints => &mut nopd.pain_points,
    };
    target.extend(items_longer_than(body, MIN_ITEM_CHARS));
}
