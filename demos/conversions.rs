use chrono::Utc;

use portal_utils::calendar::{lamp_flat_default_exposure_time, semester_bounds_at};
use portal_utils::coordinates::{
    decimal_dec_to_sexagesimal, decimal_ra_to_sexagesimal, sexagesimal_dec_to_decimal,
    sexagesimal_ra_to_decimal,
};
use portal_utils::formatter::{format_field, readable_site_name};
use portal_utils::julian_to_modified_julian;

fn main() {
    let ra = "05:35:17.3";
    let dec = "-05:23:28";

    let ra_deg = sexagesimal_ra_to_decimal(ra);
    let dec_deg = sexagesimal_dec_to_decimal(dec);

    println!("=== Coordinate Conversion Example ===");
    println!("Target: M42 (RA {}, Dec {})", ra, dec);
    println!("RA decimal: {}", ra_deg);
    println!("Dec decimal: {}", dec_deg);
    if let (Ok(r), Ok(d)) = (ra_deg.parse::<f64>(), dec_deg.parse::<f64>()) {
        println!("RA back: {}", decimal_ra_to_sexagesimal(r));
        println!("Dec back: {}", decimal_dec_to_sexagesimal(d));
    }
    println!();

    let now = Utc::now();
    let semester = semester_bounds_at(&now);
    println!("--- Current Semester ---");
    println!("Start: {}", semester.start);
    println!("End: {}", semester.end);
    println!();

    println!("--- Display Helpers ---");
    println!("{} -> {}", "group_id", format_field("group_id"));
    println!("{} -> {}", "min_lunar_distance", format_field("min_lunar_distance"));
    println!("lsc.doma.1m0a -> {}", readable_site_name("lsc.doma.1m0a"));
    println!(
        "Lamp flat (slit_1.6as, FLOYDS): {:.1} s",
        lamp_flat_default_exposure_time("slit_1.6as", "2M0-FLOYDS-SCICAM", "default")
    );
    if let Some(mjd) = julian_to_modified_julian(2_460_000.25) {
        println!("JD 2460000.25 -> MJD {}", mjd);
    }
}
