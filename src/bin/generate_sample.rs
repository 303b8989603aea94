use csv::Writer;

/// Emit a small deterministic `airport_data.csv` so the default pipeline
/// run has something to chew on.
fn main() {
    let types = [
        ("large_airport", "International"),
        ("medium_airport", "Regional"),
        ("small_airport", "Municipal"),
        ("heliport", "Heliport"),
    ];
    let regions = [
        ("US", "North America"),
        ("DE", "Europe"),
        ("JP", "Asia"),
        ("BR", "South America"),
        ("AU", "Oceania"),
    ];

    let output_path = "airport_data.csv";
    let mut writer = Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "ident",
            "type",
            "name",
            "elevation_ft",
            "iso_country",
            "continent",
        ])
        .expect("Failed to write header");

    let mut count = 0;
    for (r, &(country, continent)) in regions.iter().enumerate() {
        for (t, &(kind, suffix)) in types.iter().enumerate() {
            let ident = format!("{country}{:02}", r * types.len() + t + 1);
            let name = format!("{continent} {suffix} {}", r + 1);
            // Heliports carry no surveyed elevation in this sample.
            let elevation = if kind == "heliport" {
                String::new()
            } else {
                (((r * 137 + t * 53) % 90) * 100).to_string()
            };

            writer
                .write_record([
                    ident.as_str(),
                    kind,
                    name.as_str(),
                    elevation.as_str(),
                    country,
                    continent,
                ])
                .expect("Failed to write record");
            count += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {count} airports to {output_path}");
}
