use lib_sim::{Advance, Config, Event, FRAME_DT, GameWorld, MemoryStore, Obstacle, Phase};

const IDLE: [Event; 0] = [];

fn world() -> GameWorld<MemoryStore> {
    GameWorld::new(Config::default(), 1, MemoryStore::new())
}

fn gate(x: f32, gap_center: f32) -> Obstacle {
    let cfg = Config::default();
    Obstacle::with_gap_center(x, gap_center, cfg.screen.height, &cfg.obstacle)
}

fn tick_until_game_over(world: &mut GameWorld<MemoryStore>, events: &[Event]) {
    for _ in 0..200 {
        world.tick(FRAME_DT, events.iter().copied());
        if world.phase() == Phase::GameOver {
            return;
        }
    }
    panic!("The game never ended");
}

#[test]
fn starts_active() {
    let world = world();

    assert_eq!(world.phase(), Phase::Active);
    assert_eq!(world.score(), 0);
    assert!(world.obstacles().is_empty());
    assert_eq!(world.decorations().len(), 3);
    assert_eq!(world.avatar().pos(), world.config().avatar_start());
}

#[test]
fn action_flaps_while_active() {
    let mut world = world();
    world.tick(FRAME_DT, [Event::Action]);

    assert_eq!(world.avatar().velocity(), -7.5);
}

#[test]
fn restart_key_ignored_while_active() {
    let mut world = world();
    world.tick(FRAME_DT, [Event::Restart]);

    assert_eq!(world.phase(), Phase::Active);
    assert_eq!(world.avatar().velocity(), 0.5);
    assert_eq!(world.avatar().pos().y, 200.5);
}

#[test]
fn obstacle_spawns_at_right_edge() {
    let mut world = world();
    world.tick(FRAME_DT, [Event::SpawnObstacle]);

    let obstacle = &world.obstacles()[0];
    assert_eq!(world.obstacles().len(), 1);
    assert_eq!(obstacle.x(), 797.0);
    assert!((120.0..=280.0).contains(&obstacle.gap_center()));
}

#[test]
fn same_seed_same_gates() {
    let mut a = GameWorld::new(Config::default(), 42, MemoryStore::new());
    let mut b = GameWorld::new(Config::default(), 42, MemoryStore::new());

    for _ in 0..5 {
        a.tick(FRAME_DT, [Event::SpawnObstacle]);
        b.tick(FRAME_DT, [Event::SpawnObstacle]);
    }

    assert_eq!(a.obstacles(), b.obstacles());
    assert_eq!(a.decorations(), b.decorations());
}

#[test]
fn one_point_per_gate() {
    let mut world = world();
    world.insert_obstacle(gate(100.0, 200.0));

    world.tick(FRAME_DT, IDLE);
    assert_eq!(world.score(), 1);
    assert!(world.obstacles()[0].passed());

    for _ in 0..9 {
        world.tick(FRAME_DT, IDLE);
    }
    assert_eq!(world.phase(), Phase::Active);
    assert_eq!(world.score(), 1);
    assert_eq!(world.high_score(), 1);
    assert_eq!(world.scoreboard().store().save_count(), 1);
}

#[test]
fn offscreen_gates_are_pruned() {
    let mut world = world();
    world.insert_obstacle(gate(-59.0, 200.0));
    world.insert_obstacle(gate(400.0, 200.0));

    world.tick(FRAME_DT, IDLE);

    assert_eq!(world.obstacles().len(), 1);
    assert_eq!(world.obstacles()[0].x(), 397.0);
}

#[test]
fn offscreen_decorations_are_pruned() {
    let mut cfg = Config::default();
    cfg.decoration.initial_count = 20;
    cfg.decoration.despawn_x = 400.0;
    let mut world = GameWorld::new(cfg, 1, MemoryStore::new());

    let mut expected = world.decorations().to_vec();
    expected.iter_mut().for_each(|x| x.advance());
    expected.retain(|x| !x.is_offscreen());
    assert!(expected.len() < 20);

    world.tick(FRAME_DT, IDLE);

    assert_eq!(world.decorations(), expected.as_slice());
    assert!(world.decorations().iter().all(|x| x.pos().x >= 400.0));
}

#[test]
fn hitting_a_gate_ends_the_game() {
    let mut world = world();
    world.insert_obstacle(gate(170.0, 300.0));

    world.tick(FRAME_DT, IDLE);

    assert_eq!(world.phase(), Phase::GameOver);
    assert_eq!(world.score(), 0);
}

#[test]
fn falling_to_the_floor_ends_the_game() {
    let mut world = world();
    tick_until_game_over(&mut world, &[]);

    assert_eq!(world.avatar().bounds().bottom(), world.config().screen.height);
}

#[test]
fn flying_into_the_ceiling_ends_the_game() {
    let mut world = world();
    tick_until_game_over(&mut world, &[Event::Action]);

    assert_eq!(world.avatar().bounds().top(), 0.0);
}

#[test]
fn game_over_freezes_the_world() {
    let mut world = world();
    world.insert_obstacle(gate(600.0, 200.0));
    tick_until_game_over(&mut world, &[]);

    let avatar = world.avatar().clone();
    let obstacles = world.obstacles().to_vec();
    let decorations = world.decorations().to_vec();
    for _ in 0..10 {
        world.tick(FRAME_DT, IDLE);
    }
    world.tick(FRAME_DT, [Event::SpawnObstacle, Event::SpawnDecoration]);

    assert_eq!(world.phase(), Phase::GameOver);
    assert_eq!(world.avatar(), &avatar);
    assert_eq!(world.obstacles(), obstacles.as_slice());
    assert_eq!(world.decorations(), decorations.as_slice());
}

#[test]
fn restart_resets_exactly() {
    let mut world = world();
    world.insert_obstacle(gate(100.0, 200.0));
    world.tick(FRAME_DT, IDLE);
    world.insert_obstacle(gate(700.0, 200.0));
    tick_until_game_over(&mut world, &[]);
    assert_eq!(world.score(), 1);
    assert!(!world.obstacles().is_empty());

    let decorations = world.decorations().to_vec();
    world.tick(FRAME_DT, [Event::Action]);

    let cfg = world.config();
    assert_eq!(world.phase(), Phase::Active);
    assert_eq!(world.avatar().pos(), cfg.avatar_start());
    assert_eq!(world.avatar().velocity(), 0.0);
    assert_eq!(world.avatar().angle(), 0.0);
    assert!(world.obstacles().is_empty());
    assert_eq!(world.score(), 0);
    assert_eq!(world.high_score(), 1);
    assert_eq!(world.decorations(), decorations.as_slice());
}

#[test]
fn restart_key_restarts_after_game_over() {
    let mut world = world();
    tick_until_game_over(&mut world, &[]);

    world.tick(FRAME_DT, [Event::Restart]);

    assert_eq!(world.phase(), Phase::Active);
    assert_eq!(world.avatar().pos(), world.config().avatar_start());
}

#[test]
fn decoration_timer_rearms_within_range() {
    let mut world = world();
    let cfg = *world.config();
    assert!(cfg
        .decoration
        .first_period
        .contains(world.scheduler().decoration_period()));

    for spawned in 1..=20 {
        world.tick(FRAME_DT, [Event::SpawnDecoration]);

        assert_eq!(world.decorations().len(), 3 + spawned);
        assert!(cfg
            .decoration
            .period
            .contains(world.scheduler().decoration_period()));
    }
}

#[test]
fn obstacle_timer_spawns_gates() {
    let mut world = world();

    // Flap whenever the avatar sinks below its start to stay alive.
    for _ in 0..100 {
        let events = (world.avatar().pos().y > 220.0).then_some(Event::Action);
        world.tick(FRAME_DT, events);
        assert_eq!(world.phase(), Phase::Active);
    }

    assert_eq!(world.obstacles().len(), 1);
    assert_eq!(world.decorations().len(), 3);
}
