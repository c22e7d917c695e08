use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use jyotish_base::{current_dasha, nakshatra_from_longitude, numerology_profile};
use jyotish_chart::{
    BirthInput, BirthPlace, ChartReport, GeoCoordinate, Rules, compute_chart, parse_instant,
};

/// Julian Date of the Unix epoch, 1970-01-01T00:00Z.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

#[derive(Parser)]
#[command(name = "jyotish", about = "Birth chart and astrological analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full birth chart report
    Chart {
        /// Full name (used for numerology)
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, treated as UT)
        #[arg(long)]
        time: String,
        /// Birth place name, resolved against the built-in city table
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        place: Option<String>,
        /// Explicit latitude in degrees (requires --lon)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Explicit east longitude in degrees (requires --lat)
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Emit the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Nakshatra and pada from an ecliptic longitude
    Nakshatra {
        /// Ecliptic longitude in degrees (normally the Moon's)
        lon: f64,
    },
    /// Current Vimshottari dasha for a birth Moon longitude and date
    Dasha {
        /// Moon's ecliptic longitude at birth, degrees
        moon_lon: f64,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, default midnight)
        #[arg(long, default_value = "00:00")]
        time: String,
    },
    /// Numerology profile from a name and birth date
    Numerology {
        /// Full name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

/// Current instant as a UT Julian Date.
fn jd_now() -> f64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    UNIX_EPOCH_JD + elapsed.as_secs_f64() / 86_400.0
}

/// Parse `YYYY-MM-DD` plus `HH:MM` into a UT Julian Date, exiting on
/// malformed input. Same calendar validation as the chart path.
fn parse_jd_or_exit(date: &str, time: &str) -> f64 {
    match parse_instant(date, time) {
        Ok(jd) => jd,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn print_report(report: &ChartReport) {
    println!("Chart for {}", report.input.name);
    println!(
        "  Place: ({:.4}, {:.4})  JD {:.5}",
        report.coordinate.latitude, report.coordinate.longitude, report.jd_birth
    );
    println!("  Ascendant: {:.4} deg   MC: {:.4} deg", report.ascendant_deg, report.mc_deg);

    println!("\nPositions:");
    for pos in &report.positions {
        println!(
            "  {:8} {:>9.4} deg  {} {:>7.4} deg  house {:>2}{}",
            pos.planet.name(),
            pos.lon_deg,
            pos.placement.sign.name(),
            pos.placement.degree_in_sign,
            pos.house,
            if pos.retrograde { "  (R)" } else { "" }
        );
    }

    println!("\nHouses:");
    for house in &report.houses {
        let occupants: Vec<&str> = house.occupants.iter().map(|p| p.name()).collect();
        println!(
            "  {:>2}: {:>9.4} deg  {:11} lord {:8} [{}]",
            house.number,
            house.cusp_deg,
            house.sign.name(),
            house.lord.name(),
            occupants.join(", ")
        );
    }

    println!("\nAspects:");
    for aspect in &report.aspects {
        println!(
            "  {} {} {} (orb {:.2} deg, {:?})",
            aspect.a.name(),
            aspect.kind.name(),
            aspect.b.name(),
            aspect.orb,
            aspect.strength
        );
    }

    println!(
        "\nMoon nakshatra: {} pada {}",
        report.nakshatra.nakshatra.name(),
        report.nakshatra.pada
    );
    println!(
        "Dasha: {} ({:.2} of {:.2}-{:.2} years, {:.2} remaining)",
        report.dasha.lord.name(),
        report.dasha.elapsed_in_cycle,
        report.dasha.segment_start,
        report.dasha.segment_end,
        report.dasha.years_remaining
    );
    println!(
        "Numerology: life path {}, destiny {}, soul {}",
        report.numerology.life_path, report.numerology.destiny, report.numerology.soul
    );

    println!("\nDignities:");
    for d in &report.dignities {
        println!("  {:8} in {:11} {:?}", d.planet.name(), d.sign.name(), d.dignity);
    }

    if !report.yogas.is_empty() {
        println!("\nYogas:");
        for yoga in &report.yogas {
            println!("  {} ({:?}): {}", yoga.kind.name(), yoga.strength, yoga.kind.description());
        }
    }

    println!("\nLal Kitab:");
    println!("  Manglik: {}", if report.lal_kitab.manglik { "yes" } else { "no" });
    for remedy in report.lal_kitab.remedies() {
        println!("  - {remedy}");
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { name, date, time, place, lat, lon, json } => {
            let birth_place = match (place, lat, lon) {
                (Some(p), _, _) => BirthPlace::Named(p),
                (None, Some(lat), Some(lon)) => {
                    BirthPlace::Coordinate(GeoCoordinate::new(lat, lon))
                }
                _ => {
                    eprintln!("error: provide --place or both --lat and --lon");
                    process::exit(1);
                }
            };
            let input = BirthInput { name, date, time, place: birth_place };

            match compute_chart(&input, &Rules::standard(), jd_now()) {
                Ok(report) => {
                    if json {
                        match serde_json::to_string_pretty(&report) {
                            Ok(s) => println!("{s}"),
                            Err(e) => {
                                eprintln!("error: {e}");
                                process::exit(1);
                            }
                        }
                    } else {
                        print_report(&report);
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }

        Commands::Nakshatra { lon } => {
            let pos = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} - dasha lord {}",
                pos.nakshatra.name(),
                pos.index,
                pos.pada,
                pos.nakshatra.dasha_lord().name()
            );
        }

        Commands::Dasha { moon_lon, date, time } => {
            let jd_birth = parse_jd_or_exit(&date, &time);
            let dasha = current_dasha(moon_lon, jd_birth, jd_now());
            println!(
                "{} dasha (started under {}): {:.2} years into the cycle, \
                 segment {:.2}-{:.2}, {:.2} years remaining",
                dasha.lord.name(),
                dasha.starting_lord.name(),
                dasha.elapsed_in_cycle,
                dasha.segment_start,
                dasha.segment_end,
                dasha.years_remaining
            );
        }

        Commands::Numerology { name, date } => {
            // Reject nonexistent calendar dates before digit-summing them.
            let _ = parse_jd_or_exit(&date, "00:00");
            let mut parts = date.split('-');
            let parsed: Option<(u32, u32, u32)> = (|| {
                let y = parts.next()?.parse().ok()?;
                let m = parts.next()?.parse().ok()?;
                let d = parts.next()?.parse().ok()?;
                Some((y, m, d))
            })();
            let Some((year, month, day)) = parsed else {
                eprintln!("error: invalid date '{date}', expected YYYY-MM-DD");
                process::exit(1);
            };
            let profile = numerology_profile(&name, day, month, year);
            println!(
                "{name}: life path {}, destiny {}, soul {}",
                profile.life_path, profile.destiny, profile.soul
            );
        }
    }
}
