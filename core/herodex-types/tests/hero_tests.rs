use herodex_types::{Hero, HeroStats, Stat};

fn sample() -> Hero {
    Hero {
        id: 7,
        name: "Batman".to_string(),
        intelligence: 100,
        strength: 26,
        speed: 27,
        power: 47,
    }
}

#[test]
fn stat_order_is_fixed() {
    let names: Vec<&str> = Stat::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, vec!["intelligence", "strength", "speed", "power"]);
}

#[test]
fn stat_display_matches_as_str() {
    for stat in Stat::ALL {
        assert_eq!(stat.to_string(), stat.as_str());
    }
}

#[test]
fn hero_get_by_stat() {
    let hero = sample();
    assert_eq!(hero.get(Stat::Intelligence), 100);
    assert_eq!(hero.get(Stat::Strength), 26);
    assert_eq!(hero.get(Stat::Speed), 27);
    assert_eq!(hero.get(Stat::Power), 47);
}

#[test]
fn hero_stats_drops_id() {
    let stats = sample().stats();
    assert_eq!(stats.name, "Batman");
    assert_eq!(stats.get(Stat::Power), 47);
}

#[test]
fn hero_json_shape() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 7,
            "name": "Batman",
            "intelligence": 100,
            "strength": 26,
            "speed": 27,
            "power": 47
        })
    );
}

#[test]
fn hero_stats_from_json() {
    let stats: HeroStats = serde_json::from_str(
        r#"{"name":"Storm","intelligence":1,"strength":2,"speed":3,"power":4}"#,
    )
    .unwrap();
    assert_eq!(stats.get(Stat::Speed), 3);
}
