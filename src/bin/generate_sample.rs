use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// One row in the layout of `spacex_launch_dash.csv`.
#[derive(Serialize)]
struct SampleLaunch {
    #[serde(rename = "Flight Number")]
    flight_number: i64,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Mission Outcome")]
    mission_outcome: &'static str,
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'static str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = ["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E", "CCAFS SLC-40"];
    // (category, flights, success probability, max payload kg)
    let boosters: [(&'static str, usize, f64, f64); 5] = [
        ("v1.0", 5, 0.4, 700.0),
        ("v1.1", 15, 0.35, 4500.0),
        ("FT", 24, 0.7, 6800.0),
        ("B4", 11, 0.55, 9600.0),
        ("B5", 1, 1.0, 3600.0),
    ];

    let mut launches = Vec::new();
    let mut flight_number: i64 = 1;
    for &(category, flights, p_success, max_payload) in &boosters {
        for _ in 0..flights {
            let success = rng.next_f64() < p_success;
            // Round to whole kilograms like the manifest data.
            let payload = (rng.next_f64() * max_payload).round();
            launches.push(SampleLaunch {
                flight_number,
                launch_site: rng.pick(&sites).to_string(),
                mission_outcome: if success { "Success" } else { "Failure" },
                class: success as i64,
                payload_mass_kg: payload,
                booster_version: format!("F9 {category} B{}", 1000 + flight_number),
                booster_category: category,
            });
            flight_number += 1;
        }
    }

    // ---- CSV ----
    let csv_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    for launch in &launches {
        writer.serialize(launch).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");

    // ---- Parquet ----
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(
                launches.iter().map(|l| l.flight_number).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                launches.iter().map(|l| l.launch_site.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                launches.iter().map(|l| l.class).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                launches.iter().map(|l| l.payload_mass_kg).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                launches.iter().map(|l| l.booster_category).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let parquet_path = "spacex_launch_dash.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} launches across {} sites to {csv_path} and {parquet_path}",
        launches.len(),
        sites.len()
    );
}
