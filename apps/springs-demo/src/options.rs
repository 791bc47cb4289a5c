use clap::Parser;
use trellis_ui::VerticalJustification;

/// Lays out a toolbar row and dumps its geometry and render scene.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "springs-demo", version, about)]
pub struct DemoOptions {
    /// Row width in logical pixels.
    #[arg(long, default_value_t = 480.0, value_parser = parse_width)]
    pub width: f32,

    /// Vertical justification of the row's children: top, center or bottom.
    #[arg(long = "justify", default_value = "center", value_parser = parse_justification)]
    pub justification: VerticalJustification,

    /// Draw the row's debug background and border.
    #[arg(long)]
    pub debug: bool,
}

fn parse_width(value: &str) -> Result<f32, String> {
    let width: f32 = value
        .parse()
        .map_err(|err| format!("invalid width `{value}`: {err}"))?;
    if !width.is_finite() || width < 0.0 {
        return Err(format!("width must be a non-negative number, got {width}"));
    }
    Ok(width)
}

fn parse_justification(value: &str) -> Result<VerticalJustification, String> {
    value.parse()
}
