//! Drives a board without a window: loads watchers (from a JSON file given as
//! the first argument, or a built-in set), simulates a drag, a slider
//! adjustment and a scroll, then prints the resulting scene and project JSON.
//!
//! Set `VARWATCH_SHAPED=1` to measure text with the system fonts.

use std::rc::Rc;

use anyhow::Context;
use varwatch_core::{
    PointerEvent, PointerEventKind, PointerId, STAGE, SceneNode, Vec2, take_redraw,
};
use varwatch_text::{ApproxMeasure, ShapedMeasure, TextMeasure};
use varwatch_ui::*;

fn demo_models() -> Vec<VariableModel> {
    vec![
        VariableModel::new("score", VariantKind::Simple).with_value(12),
        VariableModel::new("timer", VariantKind::Timer).with_value(95.5),
        VariableModel::new("answer", VariantKind::Answer).with_value("forty-two"),
        VariableModel::new("speed", VariantKind::Slider)
            .with_value(2.5)
            .with_bounds(0.0, 10.5),
        VariableModel::new("inventory", VariantKind::List)
            .owned_by("hero")
            .with_items((1..=12).map(|i| format!("item number {i} with a rather long name")))
            .with_size(160.0, 140.0),
    ]
}

fn load_models() -> anyhow::Result<Option<serde_json::Value>> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(None);
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let json = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(Some(json))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let measure: Rc<dyn TextMeasure> = if std::env::var_os("VARWATCH_SHAPED").is_some() {
        Rc::new(ShapedMeasure)
    } else {
        Rc::new(ApproxMeasure::default())
    };
    let host = Rc::new(StaticHost::new().with_object("hero", "Hero"));
    let mut board = Board::new(Env::new(measure, host.clone()));

    let keys = match load_models()? {
        Some(json) => board.load_json(json)?,
        None => board.load(demo_models()),
    };
    log::info!("loaded {} watchers", keys.len());
    board.take_snapshots();

    if let Some(&first) = keys.first() {
        let hover = PointerEvent::new(PointerId(0), PointerEventKind::Enter, 320.0, 180.0);
        board.dispatch(first, HitTarget::Body, &hover)?;
        if let Some(w) = board.get(first) {
            log::info!("hovering {} shows the {} cursor", w.name(), w.cursor().css_name());
        }
        board.dispatch(first, HitTarget::Body, &PointerEvent::down(320.0, 180.0))?;
        board.dispatch(first, HitTarget::Body, &PointerEvent::moved(400.0, 200.0))?;
        board.dispatch(first, HitTarget::Body, &PointerEvent::up(400.0, 200.0))?;
    }

    host.set_running(true);
    for &key in &keys {
        let Some(widget) = board.get(key) else {
            continue;
        };
        let Some(origin) = widget.position() else {
            continue;
        };
        // thumb to the end of the slider track, or scrollbar to the bottom
        let (target, end) = match widget.layout() {
            Some(Layout::Slider(s)) => (
                HitTarget::SliderThumb,
                Vec2::new(origin.x + s.track.right(), origin.y),
            ),
            Some(Layout::List(l)) if l.window.overflow => (
                HitTarget::ScrollThumb,
                Vec2::new(origin.x, origin.y + l.height),
            ),
            _ => continue,
        };
        let start = STAGE.invert_point(origin);
        let end = STAGE.invert_point(end);
        board.dispatch(key, target, &PointerEvent::down(start.x, start.y))?;
        board.dispatch(key, target, &PointerEvent::moved(end.x, end.y))?;
        board.dispatch(key, target, &PointerEvent::up(end.x, end.y))?;
    }
    host.set_running(false);

    let mut frames = 0;
    while take_redraw() {
        frames += 1;
    }
    log::info!("{frames} frame(s) requested");

    let scene = board.paint();
    let (mut panels, mut texts) = (0, 0);
    for node in &scene.nodes {
        match node {
            SceneNode::NinePatch { .. } | SceneNode::Sprite { .. } => panels += 1,
            SceneNode::Text { text, .. } => {
                texts += 1;
                println!("text: {text}");
            }
            _ => {}
        }
    }
    println!("{} nodes ({panels} textured, {texts} text)", scene.len());
    println!("{}", serde_json::to_string_pretty(&board.to_json())?);

    board.load_snapshots();
    log::info!("rolled back to the loaded state");
    Ok(())
}
