//! Demo seed data: the fixed 20-flight catalog.

use crate::model::Flight;

#[allow(clippy::too_many_arguments)]
fn flight(
    flight_id: &str,
    airline: &str,
    departure_city: &str,
    arrival_city: &str,
    base_price: u64,
    departure_time: &str,
    arrival_time: &str,
    duration: &str,
) -> Flight {
    Flight {
        flight_id: flight_id.to_string(),
        airline: airline.to_string(),
        departure_city: departure_city.to_string(),
        arrival_city: arrival_city.to_string(),
        base_price,
        departure_time: departure_time.to_string(),
        arrival_time: arrival_time.to_string(),
        duration: duration.to_string(),
    }
}

/// The demo catalog. Base prices sit between 2000 and 3000.
pub fn seed_flights() -> Vec<Flight> {
    vec![
        flight("AI101", "Air India", "Delhi", "Mumbai", 2500, "08:00", "10:30", "2h 30m"),
        flight("UK202", "Vistara", "Mumbai", "Bangalore", 2200, "09:30", "11:15", "1h 45m"),
        flight("SG303", "SpiceJet", "Bangalore", "Hyderabad", 2000, "12:00", "13:00", "1h 00m"),
        flight("IN404", "IndiGo", "Delhi", "Kolkata", 2800, "06:00", "08:30", "2h 30m"),
        flight("AI505", "Air India", "Hyderabad", "Chennai", 2100, "14:00", "15:15", "1h 15m"),
        flight("UK606", "Vistara", "Delhi", "Bangalore", 2600, "16:00", "18:45", "2h 45m"),
        flight("SG707", "SpiceJet", "Kolkata", "Mumbai", 2700, "10:00", "12:45", "2h 45m"),
        flight("IN808", "IndiGo", "Mumbai", "Pune", 2050, "13:30", "14:15", "45m"),
        flight("AI909", "Air India", "Pune", "Goa", 2400, "15:00", "16:00", "1h 00m"),
        flight("UK010", "Vistara", "Goa", "Bangalore", 2300, "17:00", "18:15", "1h 15m"),
        flight("SG111", "SpiceJet", "Chennai", "Jaipur", 2900, "07:00", "09:30", "2h 30m"),
        flight("IN212", "IndiGo", "Jaipur", "Ahmedabad", 2200, "11:00", "12:15", "1h 15m"),
        flight("AI313", "Air India", "Ahmedabad", "Kochi", 2800, "14:30", "17:00", "2h 30m"),
        flight("UK414", "Vistara", "Kochi", "Delhi", 3000, "19:00", "22:00", "3h 00m"),
        flight("SG515", "SpiceJet", "Delhi", "Hyderabad", 2400, "05:30", "07:45", "2h 15m"),
        flight("IN616", "IndiGo", "Bangalore", "Mumbai", 2350, "20:00", "21:45", "1h 45m"),
        flight("AI717", "Air India", "Mumbai", "Chennai", 2600, "08:30", "10:45", "2h 15m"),
        flight("UK818", "Vistara", "Kolkata", "Bangalore", 2750, "12:30", "15:00", "2h 30m"),
        flight("SG919", "SpiceJet", "Pune", "Delhi", 2500, "06:30", "08:45", "2h 15m"),
        flight("IN020", "IndiGo", "Hyderabad", "Kolkata", 2650, "16:30", "18:45", "2h 15m"),
    ]
}
