use csv::{ReaderBuilder, StringRecord};

use crate::core::{ProcessedTrajectoryData, TrajectoryPoint};

/// Fallback column indices matching the ground-station log layout:
/// datetime,payload_callsign,lat,lon,alt,ascent_rate,batt,...,speed(12),temp(13),...
const IDX_DATETIME: usize = 0;
const IDX_LAT: usize = 2;
const IDX_LON: usize = 3;
const IDX_ALT: usize = 4;
const IDX_ASCENT_RATE: usize = 5;
const IDX_BATT: usize = 6;
const IDX_SPEED: usize = 12;
const IDX_TEMP: usize = 13;

/// Parse raw CSV flight-log text into a trajectory.
///
/// Best effort by contract: this never fails. Malformed rows (fewer fields
/// than the header) are skipped, unparseable numeric fields coerce to 0.0,
/// and rows without a position fix (either coordinate zero) are dropped.
/// Fields containing embedded commas (e.g. the quoted uploader_position
/// column) are tokenized correctly and do not shift the consumed columns.
pub fn parse_trajectory(csv_text: &str) -> ProcessedTrajectoryData {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = match rdr.headers() {
        Ok(h) => h.clone(),
        Err(_) => return ProcessedTrajectoryData::default(),
    };
    let columns = ColumnMap::detect(&headers);

    let mut points = Vec::new();

    for result in rdr.records() {
        let record = match result {
            Ok(r) => r,
            // A row the tokenizer rejects outright counts as malformed
            Err(_) => continue,
        };

        if record.len() < columns.width {
            continue;
        }

        let point = TrajectoryPoint {
            datetime: field(&record, columns.datetime).to_string(),
            latitude: float_or_zero(&record, columns.lat),
            longitude: float_or_zero(&record, columns.lon),
            altitude: float_or_zero(&record, columns.alt),
            ascent_rate: float_or_zero(&record, columns.ascent_rate),
            speed: float_or_zero(&record, columns.speed),
            temperature: float_or_zero(&record, columns.temperature),
            battery: float_or_zero(&record, columns.battery),
        };

        if point.has_fix() {
            points.push(point);
        }
    }

    ProcessedTrajectoryData::from_points(points)
}

/// Resolved column indices for the fields we consume
struct ColumnMap {
    datetime: usize,
    lat: usize,
    lon: usize,
    alt: usize,
    ascent_rate: usize,
    battery: usize,
    speed: usize,
    temperature: usize,
    /// Header width; shorter records are skipped
    width: usize,
}

impl ColumnMap {
    /// Resolve columns by header name, falling back to the fixed positional
    /// layout when a name is absent. Name matching is exact (after
    /// lowercasing) so e.g. "ext_temperature" or "uploader_alt" never
    /// shadow the payload fields.
    fn detect(headers: &StringRecord) -> Self {
        Self {
            datetime: find_column(headers, &["datetime"]).unwrap_or(IDX_DATETIME),
            lat: find_column(headers, &["lat", "latitude"]).unwrap_or(IDX_LAT),
            lon: find_column(headers, &["lon", "longitude", "lng"]).unwrap_or(IDX_LON),
            alt: find_column(headers, &["alt", "altitude"]).unwrap_or(IDX_ALT),
            ascent_rate: find_column(headers, &["ascent_rate"]).unwrap_or(IDX_ASCENT_RATE),
            battery: find_column(headers, &["batt", "battery"]).unwrap_or(IDX_BATT),
            speed: find_column(headers, &["speed"]).unwrap_or(IDX_SPEED),
            temperature: find_column(headers, &["temp", "temperature"]).unwrap_or(IDX_TEMP),
            width: headers.len(),
        }
    }
}

/// Find a column by checking possible names
fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header_lower = header.trim().to_lowercase();
        names.iter().any(|&name| header_lower == name)
    })
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("").trim()
}

/// Float parse that yields 0.0 on failure; a zero coordinate doubles as the
/// row-inclusion filter
fn float_or_zero(record: &StringRecord, idx: usize) -> f64 {
    field(record, idx).parse().unwrap_or(0.0)
}
