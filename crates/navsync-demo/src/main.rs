//! Navsync demo host
//!
//! Headless Bevy app that wires the sync passes around a stand-in agent
//! update and logs what each kind of entity ends up with.
//!
//! Usage: `navsync-demo [config.json] [ticks]`

use std::time::Duration;

use anyhow::Context;
use bevy::prelude::*;
use navsync_core::NavAgentSyncConfig;
use navsync_core::bevy::{
    LocalToWorld, NavAgent, NavAgentSet, NavAgentSyncPlugin, Position, Rotation,
    SyncPositionFromAgent, SyncPositionToAgent, SyncRotationFromAgent,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TICK: Duration = Duration::from_millis(50);
const DEFAULT_TICKS: u32 = 20;
const AGENT_SPEED: f32 = 2.0;
const AGENT_TURN_RATE: f32 = 0.5;

/// Marks the entity whose `Position` is authored by the external driver.
#[derive(Component)]
struct Driven;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => NavAgentSyncConfig::from_path(&path)
            .with_context(|| format!("loading sync config from {path}"))?,
        None => NavAgentSyncConfig::all(),
    };
    let ticks = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("invalid tick count '{raw}'"))?,
        None => DEFAULT_TICKS,
    };

    tracing::info!("Sync config: {config:?}");

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_duration(TICK))
        .add_plugins(NavAgentSyncPlugin::new(FixedUpdate).with_config(config))
        .add_systems(Startup, spawn_agents)
        .add_systems(FixedUpdate, advance_agents.in_set(NavAgentSet::AgentUpdate))
        .add_systems(Update, drive_external_position);

    // Drive time by hand so every run is reproducible.
    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    app.update();

    for _ in 0..ticks {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .accumulate_overstep(TICK);
        app.update();
    }

    tracing::info!("After {ticks} ticks:");
    report(app.world_mut());
    Ok(())
}

fn spawn_agents(mut commands: Commands) {
    // No explicit transform: the pose is published through LocalToWorld.
    commands.spawn((
        Name::new("lightweight"),
        NavAgent::from_position(Vec3::new(0.0, 0.0, 0.0)),
        LocalToWorld::default(),
    ));

    // Position authored elsewhere, fed into the agent before each update.
    commands.spawn((
        Name::new("driven"),
        Driven,
        NavAgent::from_position(Vec3::ZERO),
        Position(Vec3::new(0.0, 0.0, 10.0)),
        SyncPositionToAgent,
    ));

    // Agent is authoritative; both axes exported for rendering/physics.
    commands.spawn((
        Name::new("exporter"),
        NavAgent::from_position(Vec3::new(-5.0, 0.0, 0.0)),
        Position::default(),
        Rotation::default(),
        SyncPositionFromAgent,
        SyncRotationFromAgent,
    ));
}

/// Stand-in for path following: walk forward along +X and keep turning.
fn advance_agents(time: Res<Time>, mut agents: Query<&mut NavAgent>) {
    let dt = time.delta_secs();
    for mut agent in &mut agents {
        agent.position.x += AGENT_SPEED * dt;
        agent.rotation = Quat::from_rotation_y(AGENT_TURN_RATE * dt) * agent.rotation;
    }
}

/// External author of the driven entity's position (e.g. a physics step).
fn drive_external_position(mut driven: Query<&mut Position, With<Driven>>) {
    for mut position in &mut driven {
        position.0.z -= 0.25;
    }
}

fn report(world: &mut World) {
    let mut query = world.query::<(
        &Name,
        &NavAgent,
        Option<&Position>,
        Option<&Rotation>,
        Option<&LocalToWorld>,
    )>();

    for (name, agent, position, rotation, matrix) in query.iter(world) {
        tracing::info!(
            "  {:<12} agent pos={:?} rot={:?}",
            name.as_str(),
            agent.position,
            agent.rotation
        );
        if let Some(position) = position {
            tracing::info!("  {:<12} Position={:?}", "", position.0);
        }
        if let Some(rotation) = rotation {
            tracing::info!("  {:<12} Rotation={:?}", "", rotation.0);
        }
        if let Some(matrix) = matrix {
            tracing::info!("  {:<12} LocalToWorld.w={:?}", "", matrix.0.w_axis);
        }
    }
}
