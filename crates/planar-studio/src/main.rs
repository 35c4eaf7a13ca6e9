//! Headless scene walkthrough: builds a two-floor scene, mutates it the way a
//! client session would, draws every layer into a [`Canvas`] and prints what
//! came out the other end (draw commands, relay traffic, visibility requests).
//!
//! Usage: `planar-studio [config.json]`

mod config;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use planar_engine::coords::Vec2;
use planar_engine::logging::init_logging;
use planar_engine::paint::Color;
use planar_layer::{
    Aura, Canvas, Floor, FloorPlan, InvalidationMode, Layer, SceneServices, ServerShape, Shape, ShapeKind,
    SyncMode,
};

use crate::config::StudioConfig;

const GROUND_SNAPSHOT: &str = include_str!("../scene/ground.json");

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = StudioConfig::load(config_path.as_deref())?;
    init_logging(config.logging.clone());

    let mut floors = FloorPlan::new()
        .with_floor(Floor::new("cellar", ["map", "tokens"]))
        .with_floor(Floor::new("ground", ["map", "tokens", "fow"]));
    floors.select_floor(1);
    floors.select_layer("ground", "tokens");

    let (mut services, mut relay_rx) = SceneServices::new(config.user.as_str(), floors);

    let mut cellar_tokens = Layer::with_config("tokens", "cellar", config.layer.clone());
    let mut map = Layer::with_config("map", "ground", config.layer.clone());
    let mut tokens = Layer::with_config("tokens", "ground", config.layer.clone());
    tokens.selectable = true;
    tokens.player_editable = true;

    let snapshot: Vec<ServerShape> = serde_json::from_str(GROUND_SNAPSHOT).context("parsing ground snapshot")?;

    {
        let mut ctx = services.ctx();

        let loaded = map.set_shapes(&mut ctx, &snapshot);
        map.invalidate(&mut ctx, false);
        log::info!("ground map: {loaded}/{} snapshot shapes", snapshot.len());

        cellar_tokens.add_shape(
            &mut ctx,
            Shape::circle(Vec2::new(60.0, 60.0), 8.0).as_token(),
            SyncMode::NoSync,
            InvalidationMode::Normal,
            true,
        );

        let hero = tokens.add_shape(
            &mut ctx,
            Shape::circle(Vec2::new(80.0, 100.0), 10.0)
                .as_token()
                .with_owner(config.user.as_str())
                .with_fill(Color::from_srgb_u8(0xd4, 0xaf, 0x37, 0xff))
                .with_aura(Aura::new(40.0, Color::from_srgb_u8(255, 240, 180, 96)).with_dim(40.0).emitting_vision()),
            SyncMode::FullSync,
            InvalidationMode::WithLight,
            true,
        );
        let crate_box = tokens.add_shape(
            &mut ctx,
            Shape::rect(Vec2::new(200.0, 100.0), 20.0, 20.0).blocking_movement(),
            SyncMode::FullSync,
            InvalidationMode::Normal,
            true,
        );
        let ghost = tokens.add_shape(
            &mut ctx,
            Shape::rect(Vec2::new(200.0, 100.0), 20.0, 20.0),
            SyncMode::TempSync,
            InvalidationMode::Normal,
            true,
        );

        tokens.move_shape_order(&mut ctx, hero, usize::MAX, true);
        tokens.remove_shape(&mut ctx, ghost, SyncMode::TempSync);
        tokens.set_selection([hero]);

        if let Some(shape) = tokens.shape_mut(crate_box) {
            shape.kind = ShapeKind::Rect { ref_point: Vec2::new(220.0, 100.0), width: 20.0, height: 20.0 };
        }
        tokens.update_shape_points(crate_box);
        tokens.invalidate(&mut ctx, true);

        if let Some(snap) = tokens.snap_point(Vec2::new(238.0, 101.0), 5.0, Some(hero)) {
            log::info!("snap target near crate: ({}, {})", snap.x, snap.y);
        }
    }

    let drawn = tokens.wait_valid();

    let mut canvas = Canvas::new(config.viewport());
    {
        let ctx = services.ctx();
        tokens.clear(&mut canvas);
        for layer in [&mut cellar_tokens, &mut map, &mut tokens] {
            let did_work = layer.draw(&mut canvas, &ctx, false);
            log::debug!("{}/{} drawn: {did_work}", layer.floor(), layer.name());
        }
    }
    pollster::block_on(drawn).context("tokens layer never drew")?;

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for item in canvas.draw_list().items() {
        *kinds.entry(item.cmd.kind()).or_default() += 1;
    }

    println!();
    println!("  draw list: {} items", canvas.draw_list().len());
    for (kind, count) in &kinds {
        println!("    {kind:<8} {count}");
    }

    println!();
    println!("  relay:");
    for event in relay_rx.drain() {
        println!("    {}", serde_json::to_string(&event)?);
    }

    println!();
    println!("  visibility requests:");
    for request in services.visibility.take_requests() {
        println!("    {request:?}");
    }
    println!();
    println!(
        "  owned tokens: {}  annotations: {}",
        services.registry.owned_tokens().len(),
        services.registry.annotations().len()
    );
    println!();

    Ok(())
}
