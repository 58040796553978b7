//! Raidguard demo runner
//!
//! Builds a small world, loads (or creates) the config document, and fires
//! a few damage events through the plugin to show the policy in action.

use raidguard::combat::{DamageAmounts, DamageEvent, DamageKind};
use raidguard::core::error::Result;
use raidguard::core::types::{BuildingId, EntityId, PlayerId, TeamId};
use raidguard::plugin::RaidguardPlugin;
use raidguard::world::{Building, BuildingEntity, BuildingPrivilege, World};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("raidguard=debug")
        .init();

    let config_path = std::env::temp_dir().join("raidguard.json");
    let plugin = RaidguardPlugin::load(&config_path)?;
    tracing::info!(
        percentage = plugin.policy().config().damage_reduction_percentage,
        "raidguard loaded"
    );

    let owner = PlayerId(1001);
    let friend = PlayerId(1002);
    let mate = PlayerId(1003);
    let raider = PlayerId(2001);

    let mut world = World::new();
    world.players.add_player(owner, false);
    world.players.add_player(friend, false);
    world.players.add_player(mate, false);
    world.players.add_player(raider, true);
    // The authorized friend runs with a teammate; the owner stays teamless,
    // since an owner on an authorized player's team keeps the claim active.
    world.players.form_team(TeamId(1), &[friend, mate]);

    world.insert_building(Building {
        id: BuildingId(1),
        block_count: 12,
        privileges: vec![BuildingPrivilege { authorized_players: vec![friend] }],
    });
    let wall = EntityId(100);
    world.register_entity(
        wall,
        BuildingEntity::Block { building: BuildingId(1), owner: Some(owner) },
    );

    println!("=== RAIDGUARD DEMO ===\n");

    run_event("rocket while everyone is offline", &plugin, &world, wall, raider);

    world.players.set_online(mate, true);
    run_event("rocket after a defender logs in", &plugin, &world, wall, raider);

    Ok(())
}

fn run_event(
    label: &str,
    plugin: &RaidguardPlugin,
    world: &World,
    target: EntityId,
    raider: PlayerId,
) {
    let mut event = DamageEvent::new(
        target,
        DamageAmounts::single(DamageKind::Explosion, 100.0),
        Some(raider),
    );

    println!("{label}:");
    println!("  incoming damage: {:.0}", event.damage.total());
    match plugin.on_entity_take_damage(world, &mut event) {
        Some(message) => println!("  to {:?}: {}", message.to, message.text),
        None => println!("  no mitigation applied"),
    }
    println!("  applied damage:  {:.0}\n", event.damage.total());
}
