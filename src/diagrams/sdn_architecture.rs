//! "SDN Architecture and Data-to-Control Plane Saturation Attack" figure.

use crate::draw::color::{ACCENT_BLUE, ACCENT_GOLD, ACCENT_GREEN, ALERT_RED, PANEL_BACKGROUND, TEXT_DARK};
use crate::draw::{
    ArrowHead, ArrowStyle, Canvas, Color, HAlign, PatchStyle, Shape, TextLabel, Title, VAlign,
};

const CONTROL_COLOR: Color = ACCENT_BLUE;
const DATA_COLOR: Color = ACCENT_GREEN;
const APP_COLOR: Color = ACCENT_GOLD;
const ATTACK_COLOR: Color = ALERT_RED;

pub const TITLE: &str = "SDN Architecture and Data-to-Control Plane Saturation Attack";

/// Layer bands as (bottom y, fill, label).
const LAYERS: [(f64, Color, &str); 3] = [
    (1.0, APP_COLOR, "Application Layer"),
    (4.0, CONTROL_COLOR, "Control Layer"),
    (7.0, DATA_COLOR, "Infrastructure Layer (Data Plane)"),
];

/// Component labels as (x, y, text).
const COMPONENTS: [(f64, f64, &str); 10] = [
    (2.5, 1.5, "Network\nApplications"),
    (5.0, 1.5, "Management\nTools"),
    (7.5, 1.5, "Business\nApplications"),
    (2.5, 4.5, "SDN\nController"),
    (5.0, 4.5, "Network\nServices"),
    (7.5, 4.5, "Network\nFunctions"),
    (2.0, 7.5, "Switch"),
    (4.0, 7.5, "Switch"),
    (6.0, 7.5, "Switch"),
    (8.0, 7.5, "Switch"),
];

/// Builds the 10 x 8 inch layered architecture canvas.
pub fn build() -> Canvas {
    let mut canvas = Canvas::new(10.0, 8.0);
    canvas.set_axes_background(PANEL_BACKGROUND);

    for (bottom, fill, _) in LAYERS {
        canvas.add_shape(Shape::rect(
            1.0,
            bottom,
            8.0,
            2.0,
            PatchStyle::filled(fill).alpha(0.7),
        ));
    }

    for (bottom, _, label) in LAYERS {
        canvas.add_text(
            TextLabel::new(5.0, bottom + 1.0, label)
                .size(14.0)
                .bold()
                .color(TEXT_DARK)
                .centered(),
        );
    }

    for (x, y, text) in COMPONENTS {
        canvas.add_text(
            TextLabel::new(x, y, text)
                .size(10.0)
                .color(TEXT_DARK)
                .centered(),
        );
    }

    // Interfaces between the layers
    for (y, text) in [(3.0, "Northbound\nAPI"), (6.0, "Southbound\nAPI\n(OpenFlow)")] {
        canvas.add_text(
            TextLabel::new(0.5, y, text)
                .size(10.0)
                .color(TEXT_DARK)
                .centered()
                .rotated(90.0),
        );
    }

    // Normal operation
    let flow = ArrowStyle::new(ArrowHead::Forward, CONTROL_COLOR)
        .scale(20.0)
        .width(2.0);
    canvas.add_shape(Shape::arrow((5.0, 3.0), (5.0, 4.0), flow));
    canvas.add_shape(Shape::arrow((5.0, 6.0), (5.0, 7.0), flow));

    // Attack vector
    canvas.add_shape(Shape::arrow(
        (9.5, 8.0),
        (5.0, 6.0),
        ArrowStyle::new(ArrowHead::Forward, ATTACK_COLOR)
            .scale(20.0)
            .width(2.0)
            .dashed(),
    ));
    canvas.add_text(
        TextLabel::new(
            9.7,
            8.0,
            "DDoS Attack\n(Data-to-Control\nPlane Saturation)",
        )
        .size(10.0)
        .bold()
        .color(ATTACK_COLOR)
        .align(HAlign::Left, VAlign::Center),
    );

    canvas.set_limits((0.0, 11.0), (0.0, 10.0));
    canvas.hide_axes();
    canvas.set_title(Title::new(TITLE).size(16.0).bold().pad(20.0));
    canvas
}
