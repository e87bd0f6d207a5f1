//! Fills missing sensor fields from configured defaults.
//!
//! Run with: cargo run -p streamline-transforms --example merge_defaults

use serde_json::json;
use std::error::Error;
use streamline_transforms::{Event, TransformDescriptor, TransformRegistry};

fn main() -> Result<(), Box<dyn Error>> {
    let registry = TransformRegistry::with_builtins();
    let descriptor = TransformDescriptor::new("merge")
        .with_name("sensor-defaults")
        .with_property("defaults", json!({"unit": "C", "site": "north", "calibrated": false}));
    let transform = registry.create(&descriptor)?;
    println!("{transform}");

    let readings = [
        json!({"temperature": 21.5}),
        json!({"temperature": 70.1, "unit": "F"}),
        json!({"temperature": 19.0, "site": null}),
    ];

    for reading in readings {
        let event = Event::new(serde_json::from_value(reading)?, "sensor-gateway");
        for out in transform.execute(&event)? {
            println!("{}", serde_json::to_string(&out)?);
        }
    }

    Ok(())
}
