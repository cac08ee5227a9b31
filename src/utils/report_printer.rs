use std::io::{self, Write};

use crate::{
    services::serp_client::types::google_maps_response::GoogleMapsResponse,
    types::place_record::PlaceRecord,
};

pub const CSV_HEADER: &str = "store name,phone number,address";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub csv: bool,
    pub ratings: bool,
}

/// Writes the human-readable listing, and the CSV block when requested.
pub fn print_report<W: Write>(
    out: &mut W,
    places: &[PlaceRecord],
    response: &GoogleMapsResponse,
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "\n=== Search results: phone number list ===\n")?;
    writeln!(out, "{} stores found\n", places.len())?;

    if places.is_empty() {
        writeln!(out, "No phone numbers found.")?;
        writeln!(out, "\nDebug info:")?;
        if let Some(response) = response.as_ref().filter(|r| !r.is_empty()) {
            let keys = response.keys().map(String::as_str).collect::<Vec<_>>();
            writeln!(out, "Response keys: {:?}", keys)?;
        }
    } else {
        for (index, place) in places.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, place.title)?;
            writeln!(out, "   Phone: {}", place.phone)?;
            writeln!(out, "   Address: {}", place.address)?;
            if options.ratings {
                writeln!(out, "   Rating: {}", place.stats.describe())?;
            }
            writeln!(out)?;
        }

        writeln!(out, "\n=== Phone numbers only ===\n")?;
        for (index, place) in places.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, place.phone)?;
        }
    }

    if options.csv {
        print_csv(out, places)?;
    }

    Ok(())
}

// Fields are quoted but embedded quotes are written as-is.
fn print_csv<W: Write>(out: &mut W, places: &[PlaceRecord]) -> io::Result<()> {
    writeln!(out, "\n=== CSV ===\n")?;
    writeln!(out, "{}", CSV_HEADER)?;
    for place in places {
        writeln!(
            out,
            "\"{}\",\"{}\",\"{}\"",
            place.title, place.phone, place.address
        )?;
    }

    Ok(())
}
