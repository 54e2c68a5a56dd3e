//! "Distributed Mobile Agent Framework for SDN Security" figure.
//!
//! Monitor agents sit above each switch, analyzer agents aggregate their
//! reports and talk to the controller, and mitigation agents below the
//! switches push back against an incoming DDoS flow.

use crate::draw::color::{
    ACCENT_BLUE, ACCENT_GOLD, ACCENT_GREEN, ALERT_RED, GRAY, LIGHT_BLUE, LIGHT_GRAY,
    PANEL_BACKGROUND, TEXT_DARK, WHITE,
};
use crate::draw::{
    ArrowHead, ArrowStyle, Canvas, Color, HAlign, Legend, LegendLocation, LegendSymbol, PatchStyle,
    Point, Shape, TextLabel, Title, VAlign,
};

const MONITOR_COLOR: Color = ACCENT_BLUE;
const ANALYZER_COLOR: Color = ACCENT_GREEN;
const MITIGATION_COLOR: Color = ACCENT_GOLD;
const SWITCH_COLOR: Color = LIGHT_GRAY;
const CONTROLLER_COLOR: Color = LIGHT_BLUE;
const ATTACK_COLOR: Color = ALERT_RED;

/// Bottom-center of the controller, where every control channel ends.
const CONTROLLER_PORT: Point = (6.0, 7.0);

const SWITCHES: [Point; 4] = [(2.0, 3.0), (5.0, 3.0), (8.0, 3.0), (11.0, 3.0)];
const MONITORS: [Point; 4] = [(2.0, 4.5), (5.0, 4.5), (8.0, 4.5), (11.0, 4.5)];
const ANALYZERS: [Point; 2] = [(3.5, 6.0), (8.5, 6.0)];
const MITIGATORS: [Point; 4] = [(2.0, 1.5), (5.0, 1.5), (8.0, 1.5), (11.0, 1.5)];

const SWITCH_SIZE: f64 = 1.5;

pub const TITLE: &str = "Distributed Mobile Agent Framework for SDN Security";
pub const CAPTION: &str =
    "Mobile agents detect and mitigate data-to-control plane saturation attacks";

/// Builds the 12 x 9 inch mobile agent framework canvas.
pub fn build() -> Canvas {
    let mut canvas = Canvas::new(12.0, 9.0);
    canvas.set_axes_background(PANEL_BACKGROUND);

    // SDN infrastructure
    canvas.add_shape(Shape::rect(
        4.0,
        7.0,
        4.0,
        1.5,
        PatchStyle::filled(CONTROLLER_COLOR).alpha(0.7),
    ));
    canvas.add_text(
        TextLabel::new(6.0, 7.75, "SDN Controller")
            .size(12.0)
            .bold()
            .color(TEXT_DARK)
            .centered(),
    );

    for (i, &(x, y)) in SWITCHES.iter().enumerate() {
        canvas.add_shape(Shape::rect(
            x - SWITCH_SIZE / 2.0,
            y - SWITCH_SIZE / 2.0,
            SWITCH_SIZE,
            SWITCH_SIZE,
            PatchStyle::filled(SWITCH_COLOR).alpha(0.7),
        ));
        canvas.add_text(
            TextLabel::new(x, y, format!("Switch {}", i + 1))
                .size(10.0)
                .color(TEXT_DARK)
                .centered(),
        );
    }

    for &(x, y) in &SWITCHES {
        canvas.add_shape(Shape::arrow(
            (x, y + 0.8),
            CONTROLLER_PORT,
            ArrowStyle::new(ArrowHead::Both, GRAY).scale(15.0),
        ));
    }

    // Agents
    add_agents(&mut canvas, &MONITORS, 0.4, MONITOR_COLOR, "M", WHITE);
    add_agents(&mut canvas, &ANALYZERS, 0.5, ANALYZER_COLOR, "A", WHITE);
    add_agents(&mut canvas, &MITIGATORS, 0.4, MITIGATION_COLOR, "Mt", TEXT_DARK);

    // Communication channels
    let report = ArrowStyle::new(ArrowHead::Forward, MONITOR_COLOR).scale(15.0);
    for &monitor in &MONITORS[..2] {
        canvas.add_shape(Shape::arrow(monitor, ANALYZERS[0], report));
    }
    for &monitor in &MONITORS[2..] {
        canvas.add_shape(Shape::arrow(monitor, ANALYZERS[1], report));
    }

    let control = ArrowStyle::new(ArrowHead::Both, ANALYZER_COLOR).scale(15.0);
    for &analyzer in &ANALYZERS {
        canvas.add_shape(Shape::arrow(analyzer, CONTROLLER_PORT, control));
    }

    let dispatch = ArrowStyle::new(ArrowHead::Forward, MITIGATION_COLOR).scale(15.0);
    for (analyzer, mitigator) in [(0, 0), (0, 1), (1, 2), (1, 3)] {
        canvas.add_shape(Shape::arrow(
            ANALYZERS[analyzer],
            MITIGATORS[mitigator],
            dispatch,
        ));
    }

    // Attack and response
    canvas.add_shape(Shape::arrow(
        (13.5, 2.5),
        (11.5, 3.0),
        ArrowStyle::new(ArrowHead::Forward, ATTACK_COLOR)
            .scale(20.0)
            .width(2.0)
            .dashed(),
    ));
    canvas.add_text(
        TextLabel::new(13.7, 2.5, "DDoS Attack")
            .size(10.0)
            .bold()
            .color(ATTACK_COLOR)
            .align(HAlign::Left, VAlign::Center),
    );

    canvas.add_shape(Shape::arrow(
        MITIGATORS[3],
        (12.0, 2.5),
        ArrowStyle::new(ArrowHead::ForwardFilled, MITIGATION_COLOR)
            .scale(20.0)
            .width(2.0),
    ));
    canvas.add_text(
        TextLabel::new(12.2, 2.3, "Mitigation")
            .size(10.0)
            .bold()
            .color(MITIGATION_COLOR)
            .align(HAlign::Left, VAlign::Center),
    );

    canvas.set_legend(
        Legend::new(LegendLocation::UpperLeft)
            .font_size(10.0)
            .entry(LegendSymbol::swatch(MONITOR_COLOR), "Monitor Agent")
            .entry(LegendSymbol::swatch(ANALYZER_COLOR), "Analyzer Agent")
            .entry(LegendSymbol::swatch(MITIGATION_COLOR), "Mitigation Agent")
            .entry(LegendSymbol::swatch(CONTROLLER_COLOR), "SDN Controller")
            .entry(LegendSymbol::swatch(SWITCH_COLOR), "SDN Switch"),
    );

    canvas.set_title(Title::new(TITLE).size(16.0).bold().pad(20.0));
    canvas.add_text(
        TextLabel::new(6.5, 0.5, CAPTION)
            .size(12.0)
            .italic()
            .centered(),
    );

    canvas.set_limits((0.0, 14.0), (0.0, 9.0));
    canvas.hide_axes();
    canvas
}

/// Adds one labelled circle per position.
fn add_agents(
    canvas: &mut Canvas,
    positions: &[Point],
    radius: f64,
    fill: Color,
    label: &str,
    label_color: Color,
) {
    for &position in positions {
        canvas.add_shape(Shape::circle(
            position,
            radius,
            PatchStyle::filled(fill).alpha(0.8),
        ));
        canvas.add_text(
            TextLabel::new(position.0, position.1, label)
                .size(10.0)
                .bold()
                .color(label_color)
                .centered(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(canvas: &Canvas, predicate: impl Fn(&Shape) -> bool) -> usize {
        canvas.shapes.iter().filter(|shape| predicate(shape)).count()
    }

    #[test]
    fn places_every_component() {
        let canvas = build();
        // controller + four switches
        assert_eq!(count(&canvas, |s| matches!(s, Shape::Rect { .. })), 5);
        // 4 monitors + 2 analyzers + 4 mitigators
        assert_eq!(count(&canvas, |s| matches!(s, Shape::Circle { .. })), 10);
        // 4 switch links + 4 reports + 2 control + 4 dispatch + attack + defense
        assert_eq!(count(&canvas, |s| matches!(s, Shape::Arrow { .. })), 16);
    }

    #[test]
    fn labels_switches_in_order() {
        let canvas = build();
        let switches: Vec<&str> = canvas
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text(label) if label.text.starts_with("Switch") => Some(label.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(switches, ["Switch 1", "Switch 2", "Switch 3", "Switch 4"]);
    }

    #[test]
    fn attack_arrow_is_dashed() {
        let canvas = build();
        let attack = canvas
            .shapes
            .iter()
            .find_map(|shape| match shape {
                Shape::Arrow { from, style, .. } if *from == (13.5, 2.5) => Some(*style),
                _ => None,
            })
            .expect("attack arrow present");
        assert_eq!(attack.line_style, crate::draw::LineStyle::Dashed);
        assert_eq!(attack.color, ATTACK_COLOR);
        assert_eq!(attack.line_width, 2.0);
    }

    #[test]
    fn legend_lists_agents_then_infrastructure() {
        let canvas = build();
        let legend = canvas.legend.as_ref().expect("legend present");
        let labels: Vec<&str> = legend.entries.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Monitor Agent",
                "Analyzer Agent",
                "Mitigation Agent",
                "SDN Controller",
                "SDN Switch"
            ]
        );
        let fills: Vec<Color> = legend.entries.iter().map(|(symbol, _)| symbol.fill).collect();
        assert_eq!(
            fills,
            [
                MONITOR_COLOR,
                ANALYZER_COLOR,
                MITIGATION_COLOR,
                CONTROLLER_COLOR,
                SWITCH_COLOR
            ]
        );
        assert_eq!(legend.location, LegendLocation::UpperLeft);
    }

    #[test]
    fn axes_are_hidden_with_fixed_limits() {
        let canvas = build();
        assert_eq!(canvas.axes.x_limits, (0.0, 14.0));
        assert_eq!(canvas.axes.y_limits, (0.0, 9.0));
        assert!(!canvas.axes.visible);
        assert_eq!(canvas.title.as_ref().map(|t| t.text.as_str()), Some(TITLE));
    }
}
