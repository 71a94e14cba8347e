use game_core::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

struct MockCanvas {
    attributes: HashMap<String, String>,
}

impl AttributeSource for MockCanvas {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

impl CanvasElement for MockCanvas {
    fn width(&self) -> u32 {
        300
    }
    fn height(&self) -> u32 {
        150
    }
}

/// A page with a single container holding one canvas
struct MockPage {
    container_id: String,
    attributes: HashMap<String, String>,
}

impl MockPage {
    fn new(container_id: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            container_id: container_id.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl CanvasHost for MockPage {
    type Canvas = MockCanvas;

    fn find_canvas(&self, container_id: &str) -> Option<MockCanvas> {
        if container_id == self.container_id {
            Some(MockCanvas {
                attributes: self.attributes.clone(),
            })
        } else {
            None
        }
    }
}

const STANDARD: &[(&str, &str)] = &[
    ("shipRows", "3"),
    ("shipColumns", "5"),
    ("shipSize", "10"),
    ("shipOffset", "2"),
    ("defenderBulletLength", "4"),
    ("shotsPerFrame", "1"),
];

fn options(container_id: &str) -> SetupOptions {
    SetupOptions {
        container_id: container_id.to_string(),
    }
}

#[test]
fn test_bind_custom_settings_shape() {
    let page = MockPage::new("invaderers", STANDARD);
    let canvas = page.find_canvas("invaderers").unwrap();

    let settings = InvaderersHooks.bind_custom_settings(&canvas);

    let json = serde_json::to_value(settings).unwrap();
    let expected = serde_json::json!({
        "shipRows": 3.0,
        "shipColumns": 5.0,
        "totalShips": 15.0,
        "shipSize": 10.0,
        "shipOffset": 2.0,
        "shipJump": 5.0,
        "defenderBulletLength": 4.0,
        "shotsPerFrame": 1.0
    });
    assert_eq!(json, expected);
}

#[test]
fn test_setup_game_starts_reset() {
    let page = MockPage::new("invaderers", STANDARD);
    let game = setup_game(&page, options("invaderers")).unwrap();

    let battle = &game.helpers().battle_helper;
    assert_eq!(battle.remaining_ships(), 15);
    assert_eq!(battle.shots_left(), 1);
    assert_eq!(game.fill_colors(), &COLORS);
    assert_eq!(game.screen_settings().width, 300.0);
    assert_eq!(game.screen_settings().custom.total_ships, 15.0);
}

#[test]
fn test_reset_delegates_to_battle_helper() {
    let page = MockPage::new("invaderers", STANDARD);
    let mut game = setup_game(&page, options("invaderers")).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.map_observers()
        .subscribe(move |event| sink.borrow_mut().push(*event));

    {
        let battle = &mut game.helpers_mut().battle_helper;
        assert!(battle.destroy_ship(2, 4));
        assert!(battle.fire_defender().is_some());
        assert_eq!(battle.remaining_ships(), 14);
    }

    game.reset();

    let battle = &game.helpers().battle_helper;
    assert_eq!(battle.remaining_ships(), 15);
    assert!(battle.defender_bullets().is_empty());
    assert_eq!(
        *events.borrow(),
        vec![
            MapEvent::ShipDestroyed {
                row: 2,
                column: 4,
                remaining: 14
            },
            MapEvent::DefenderFired { shots_left: 0 },
            MapEvent::Reset { ships: 15 },
        ]
    );
}

#[test]
fn test_missing_attributes_do_not_fail_setup() {
    let page = MockPage::new("invaderers", &[("shipRows", "3")]);
    let game = setup_game(&page, options("invaderers")).unwrap();

    let settings = game.screen_settings().custom;
    assert_eq!(settings.ship_rows, 3.0);
    assert!(settings.ship_columns.is_nan());
    assert!(settings.total_ships.is_nan());
    assert_eq!(game.helpers().battle_helper.remaining_ships(), 0);
}

#[test]
fn test_unknown_container_is_an_error() {
    let page = MockPage::new("invaderers", STANDARD);
    match setup_game(&page, options("missing")) {
        Err(CanvasError::ContainerNotFound(id)) => assert_eq!(id, "missing"),
        Ok(_) => panic!("setup should fail without a canvas"),
    }
}

#[test]
fn test_clearing_the_formation() {
    let page = MockPage::new(
        "invaderers",
        &[
            ("shipRows", "1"),
            ("shipColumns", "2"),
            ("shipSize", "8"),
            ("shipOffset", "1"),
            ("defenderBulletLength", "6"),
            ("shotsPerFrame", "3"),
        ],
    );
    let mut game = setup_game(&page, options("invaderers")).unwrap();
    let battle = &mut game.helpers_mut().battle_helper;

    assert!(battle.destroy_ship(0, 0));
    assert!(!battle.is_cleared());
    assert!(battle.destroy_ship(0, 1));
    assert!(battle.is_cleared());
    assert_eq!(battle.score().ships_destroyed, 2);
}
