mod options;

use clap::Parser;
use options::DemoOptions;
use trellis_ui::{
    format_layout_tree, take_damage, Block, Brush, Color, DebugStyle, HeadlessRenderer,
    LayoutOwner, LinearGroup, RenderOp, Size, SizeConfig, Spring, Strut,
};

const ICON: f32 = 24.0;
const BUTTON_HEIGHT: f32 = 28.0;
const ICON_BLUE: Color = Color::from_rgb_u8(66, 133, 244);

/// A toolbar: icon, title, a spring pushing two buttons to the right edge.
fn toolbar(options: &DemoOptions) -> LinearGroup {
    let button = |color| {
        Block::new(
            SizeConfig::elastic(48.0, 72.0, 96.0),
            SizeConfig::fixed(BUTTON_HEIGHT),
        )
        .with_fill(Brush::solid(color))
    };

    let row = LinearGroup::row()
        .with_justification(options.justification)
        .with_child(Block::fixed(ICON, ICON).with_fill(Brush::solid(ICON_BLUE)))
        .with_child(Strut::horizontal(8.0))
        .with_child(
            Block::new(
                SizeConfig::elastic(40.0, 160.0, 160.0),
                SizeConfig::fixed(18.0),
            )
            .with_fill(Brush::solid(Color::rgb(0.2, 0.2, 0.2))),
        )
        .with_child(Spring::new())
        .with_child(button(Color::GREEN))
        .with_child(Strut::horizontal(4.0))
        .with_child(button(Color::RED));

    if options.debug {
        row.with_debug_style(DebugStyle::default())
    } else {
        row
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::parse();
    log::info!("laying out toolbar at width {}", options.width);

    let mut owner = LayoutOwner::new(toolbar(&options), Size::new(options.width, 100.0));
    owner.layout();

    print!("{}", format_layout_tree(owner.root()));

    let scene = HeadlessRenderer::new().render(owner.root());
    println!("=== RENDER SCENE ===");
    for (index, op) in scene.operations().iter().enumerate() {
        match op {
            RenderOp::Primitive {
                node_id,
                layer,
                primitive,
            } => println!("[{index}] Node #{node_id} - {layer:?}: {primitive:?}"),
            RenderOp::PushClip { node_id, rect } => {
                println!("[{index}] Node #{node_id} - clip to {rect:?}")
            }
            RenderOp::PopClip { node_id } => println!("[{index}] Node #{node_id} - end clip"),
        }
    }

    let damaged = take_damage();
    log::debug!("damaged nodes after first layout: {damaged:?}");
    Ok(())
}
