use std::fmt::Write;

use elimination_wheel_core::{pointer_sector, sector_layout, RandomSource, Session};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectorView {
    pub index: usize,
    pub name: String,
    pub color: &'static str,
    pub start_deg: f64,
    pub end_deg: f64,
    pub under_pointer: bool,
}

/// What a drawing collaborator needs for one frame: every active entry with
/// its sector angles and colour.
pub fn describe_wheel<R: RandomSource>(session: &mut Session<R>) -> Vec<SectorView> {
    let rotation = session.rotation();
    let names = session.active().to_vec();
    let pointer = pointer_sector(rotation, names.len());

    sector_layout(rotation, names.len())
        .into_iter()
        .zip(names)
        .map(|(sector, name)| SectorView {
            index: sector.index,
            color: session.color_for(&name).hex,
            name,
            start_deg: sector.start.to_degrees(),
            end_deg: sector.end.to_degrees(),
            under_pointer: pointer == Some(sector.index),
        })
        .collect()
}

pub fn format_wheel(views: &[SectorView], eliminated: &[String]) -> String {
    let mut out = String::new();
    if views.is_empty() {
        out.push_str("(empty wheel)\n");
    }
    for view in views {
        let marker = if view.under_pointer { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} [{}] {:<20} {}  {:>8.2}..{:>8.2} deg",
            view.index, view.name, view.color, view.start_deg, view.end_deg
        );
    }
    if !eliminated.is_empty() {
        let _ = writeln!(out, "Eliminated ({}): {}", eliminated.len(), eliminated.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use elimination_wheel_core::{SeededRng, WheelConfig};

    #[test]
    fn exactly_one_sector_under_pointer() {
        let mut session = Session::new(WheelConfig::default(), SeededRng::new(3))
            .expect("default config")
            .with_rotation(1.1);
        for name in ["A", "B", "C", "D"] {
            session.add(name).expect("add");
        }
        let views = describe_wheel(&mut session);
        assert_eq!(views.len(), 4);
        assert_eq!(views.iter().filter(|view| view.under_pointer).count(), 1);
        assert_eq!(views[0].color, "#7c3aed");

        let text = format_wheel(&views, &[]);
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.matches('>').count(), 1);
    }

    #[test]
    fn marker_follows_the_resolver_on_a_sector_edge() {
        use elimination_wheel_core::resolve_winner;

        let rotation = -3.141_592_653_589_792_7;
        let mut session = Session::new(WheelConfig::default(), SeededRng::new(3))
            .expect("default config")
            .with_rotation(rotation);
        for name in ["A", "B"] {
            session.add(name).expect("add");
        }
        let views = describe_wheel(&mut session);
        let marked: Vec<usize> = views
            .iter()
            .filter(|view| view.under_pointer)
            .map(|view| view.index)
            .collect();
        assert_eq!(marked, [resolve_winner(rotation, 2).expect("two entries")]);
    }

    #[test]
    fn empty_wheel_has_placeholder() {
        assert_eq!(format_wheel(&[], &[]), "(empty wheel)\n");
    }
}
