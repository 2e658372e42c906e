use sunlight_hours::{City, SunlightConfig};

const CITY_INFO: &str = r#"[
    {"neighborhood": "POBLENOU", "apartments_height": 1, "buildings": [
        {"name": "Aticco", "apartments_count": 8, "distance": 1},
        {"name": "01", "apartments_count": 4, "distance": 2},
        {"name": "CEM", "apartments_count": 7, "distance": 1},
        {"name": "30", "apartments_count": 1, "distance": -1}
    ]},
    {"neighborhood": "RAVAL", "apartments_height": 2, "buildings": [
        {"name": "Santa Monica", "apartments_count": 3, "distance": 1},
        {"name": "La Capella", "apartments_count": 2, "distance": 1},
        {"name": "CCCB", "apartments_count": 4, "distance": -1}
    ]}
]"#;

fn main() -> sunlight_hours::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SunlightConfig::from_file(path)?,
        None => SunlightConfig::default(),
    };
    let mut city = City::from_config(&config)?;
    city.initialize(CITY_INFO)?;

    println!("=== Sunlight hours: {} ({} - {}) ===", city.name, city.dawn, city.sunset);
    for neighbourhood in &city.neighbourhoods {
        println!();
        println!("--- {} ---", neighbourhood.name);
        for building in &neighbourhood.buildings {
            for floor in 0..building.apartments_count {
                if let Some(hours) = building.sunlight_hours(floor) {
                    println!("{:<14} floor {:>2}: {}", building.name, floor, hours);
                }
            }
        }
    }
    Ok(())
}
