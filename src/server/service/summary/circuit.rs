//! Circuit tab: race metadata plus lap-level datasets.

use std::collections::BTreeMap;

use crate::{
    model::circuit_summary::{
        CircuitFastestLapDto, DriverFastestLapDto, DriverLapPositionDto, DriverLapTimeDto,
        LapMillisecondsDto, LapPositionDto, PaceCandlestickDto, RaceCircuitSummaryDto,
        TopFastestLapDto,
    },
    server::{
        model::{
            driver::{full_name_or_unknown, UNKNOWN_DRIVER},
            lap_time::DriverLap,
            race::RaceWithCircuit,
            result::RaceResult,
        },
        util::format::{format_lap_time, NOT_AVAILABLE},
    },
};

/// Assembles the circuit tab payload.
///
/// Laps without a driver row are left out of every lap dataset.
///
/// # Arguments
/// - `race` - Race and circuit metadata
/// - `laps` - Every lap of the race in key order (driver, then lap)
/// - `top` - The fastest laps of the race, fastest first
/// - `results` - Race classification, used to find the winner
pub fn build(
    race: RaceWithCircuit,
    mut laps: Vec<DriverLap>,
    mut top: Vec<DriverLap>,
    results: &[RaceResult],
) -> RaceCircuitSummaryDto {
    laps.retain(|lap| lap.driver.is_some());
    top.retain(|lap| lap.driver.is_some());

    let fastest_lap = match top.first() {
        Some(lap) => CircuitFastestLapDto {
            time: format_lap_time(Some(lap.milliseconds)),
            driver: Some(full_name_or_unknown(lap.driver.as_ref())),
            lap: Some(lap.lap),
        },
        None => CircuitFastestLapDto {
            time: NOT_AVAILABLE.to_string(),
            driver: None,
            lap: None,
        },
    };

    let top_fastest_laps = top
        .iter()
        .enumerate()
        .map(|(index, lap)| TopFastestLapDto {
            position: index as u32 + 1,
            driver: lap
                .driver
                .as_ref()
                .map(|driver| driver.surname.clone())
                .unwrap_or_else(|| UNKNOWN_DRIVER.to_string()),
            lap: lap.lap,
            milliseconds: lap.milliseconds,
        })
        .collect();

    let (pace_evolution, position_evolution) = lap_evolution(&laps);

    RaceCircuitSummaryDto {
        circuit_name: race.circuit_name,
        location: race.location,
        race_name: race.race.name,
        year: race.race.year,
        fastest_lap,
        fastest_laps_per_driver: fastest_laps_per_driver(&laps),
        winner_position_changes: winner_position_changes(&laps, results),
        fastest_lap_timeline: fastest_lap_timeline(&laps),
        top_fastest_laps,
        pace_evolution,
        pace_candlestick: pace_candlestick(&laps),
        position_evolution,
    }
}

/// Lap times and running positions of every driver, ordered by full name then lap.
fn lap_evolution(laps: &[DriverLap]) -> (Vec<DriverLapTimeDto>, Vec<DriverLapPositionDto>) {
    let mut named: Vec<(String, &DriverLap)> = laps
        .iter()
        .map(|lap| (full_name_or_unknown(lap.driver.as_ref()), lap))
        .collect();
    named.sort_by(|(a_name, a), (b_name, b)| a_name.cmp(b_name).then(a.lap.cmp(&b.lap)));

    let pace = named
        .iter()
        .map(|(driver, lap)| DriverLapTimeDto {
            driver: driver.clone(),
            lap: lap.lap,
            milliseconds: lap.milliseconds,
        })
        .collect();
    let positions = named
        .into_iter()
        .map(|(driver, lap)| DriverLapPositionDto {
            driver,
            lap: lap.lap,
            position: lap.position.value(),
        })
        .collect();

    (pace, positions)
}

/// Best lap of each driver, fastest first.
fn fastest_laps_per_driver(laps: &[DriverLap]) -> Vec<DriverFastestLapDto> {
    let mut best: BTreeMap<i32, &DriverLap> = BTreeMap::new();
    for lap in laps {
        best.entry(lap.driver_id)
            .and_modify(|current| {
                if lap.milliseconds < current.milliseconds {
                    *current = lap;
                }
            })
            .or_insert(lap);
    }

    let mut rows: Vec<DriverFastestLapDto> = best
        .into_values()
        .map(|lap| DriverFastestLapDto {
            driver: full_name_or_unknown(lap.driver.as_ref()),
            milliseconds: lap.milliseconds,
        })
        .collect();
    rows.sort_by_key(|row| row.milliseconds);

    rows
}

/// Running position of the race winner on every lap they completed.
fn winner_position_changes(laps: &[DriverLap], results: &[RaceResult]) -> Vec<LapPositionDto> {
    let Some(winner) = results.iter().find(|result| result.position.is_winner()) else {
        return Vec::new();
    };

    let mut changes: Vec<LapPositionDto> = laps
        .iter()
        .filter(|lap| lap.driver_id == winner.driver_id)
        .map(|lap| LapPositionDto {
            lap: lap.lap,
            position: lap.position.value(),
        })
        .collect();
    changes.sort_by_key(|change| change.lap);

    changes
}

fn fastest_lap_timeline(laps: &[DriverLap]) -> Vec<LapMillisecondsDto> {
    let mut timeline: Vec<LapMillisecondsDto> = laps
        .iter()
        .map(|lap| LapMillisecondsDto {
            lap: lap.lap,
            milliseconds: lap.milliseconds,
        })
        .collect();
    timeline.sort_by_key(|point| point.lap);

    timeline
}

#[derive(Default)]
struct PaceStats {
    driver: String,
    min: i64,
    max: i64,
    total: i64,
    count: u32,
}

/// Min, mean and max lap time per driver, ordered by driver ID.
fn pace_candlestick(laps: &[DriverLap]) -> Vec<PaceCandlestickDto> {
    let mut stats: BTreeMap<i32, PaceStats> = BTreeMap::new();
    for lap in laps {
        let Some(driver) = lap.driver.as_ref() else {
            continue;
        };

        let entry = stats.entry(lap.driver_id).or_insert_with(|| PaceStats {
            driver: driver.full_name(),
            min: lap.milliseconds,
            max: lap.milliseconds,
            ..Default::default()
        });
        entry.min = entry.min.min(lap.milliseconds);
        entry.max = entry.max.max(lap.milliseconds);
        entry.total += lap.milliseconds;
        entry.count += 1;
    }

    stats
        .into_values()
        .map(|stats| PaceCandlestickDto {
            driver: stats.driver,
            min: stats.min,
            avg: stats.total as f64 / f64::from(stats.count),
            max: stats.max,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::{
        driver::DriverName,
        position::Position,
        race::Race,
    };

    fn name(forename: &str, surname: &str) -> Option<DriverName> {
        Some(DriverName {
            forename: forename.to_string(),
            surname: surname.to_string(),
        })
    }

    fn lap(driver_id: i32, driver: Option<DriverName>, lap: i32, ms: i64, pos: Option<i32>) -> DriverLap {
        DriverLap {
            driver_id,
            driver,
            lap,
            position: pos.map(Position::Classified).unwrap_or(Position::Unclassified),
            milliseconds: ms,
        }
    }

    fn winner(driver_id: i32) -> RaceResult {
        RaceResult {
            driver_id,
            constructor_id: 1,
            driver: None,
            team: None,
            position: Position::Classified(1),
            time: None,
            milliseconds: None,
            points: None,
            laps: None,
        }
    }

    fn race() -> RaceWithCircuit {
        RaceWithCircuit {
            race: Race {
                id: 1,
                year: 2009,
                round: 1,
                circuit_id: 1,
                name: "Australian Grand Prix".to_string(),
                date: None,
                url: None,
            },
            circuit_name: "Albert Park Grand Prix Circuit".to_string(),
            location: Some("Melbourne".to_string()),
        }
    }

    #[test]
    fn empty_laps_keep_metadata() {
        let summary = build(race(), Vec::new(), Vec::new(), &[]);

        assert_eq!(summary.circuit_name, "Albert Park Grand Prix Circuit");
        assert_eq!(summary.location.as_deref(), Some("Melbourne"));
        assert_eq!(summary.race_name, "Australian Grand Prix");
        assert_eq!(summary.year, 2009);
        assert_eq!(summary.fastest_lap.time, "N/A");
        assert_eq!(summary.fastest_lap.driver, None);
        assert!(summary.top_fastest_laps.is_empty());
        assert!(summary.pace_evolution.is_empty());
        assert!(summary.position_evolution.is_empty());
        assert!(summary.pace_candlestick.is_empty());
        assert!(summary.winner_position_changes.is_empty());
    }

    #[test]
    fn ranks_top_laps_and_uses_surnames() {
        let top = vec![
            lap(2, name("Rubens", "Barrichello"), 2, 89_400, Some(3)),
            lap(1, name("Jenson", "Button"), 2, 89_500, Some(1)),
        ];

        let summary = build(race(), top.clone(), top, &[]);

        let ranks: Vec<(u32, &str)> = summary
            .top_fastest_laps
            .iter()
            .map(|row| (row.position, row.driver.as_str()))
            .collect();
        assert_eq!(ranks, vec![(1, "Barrichello"), (2, "Button")]);
        assert_eq!(summary.fastest_lap.time, "1:29.400");
        assert_eq!(summary.fastest_lap.driver.as_deref(), Some("Rubens Barrichello"));
        assert_eq!(summary.fastest_lap.lap, Some(2));
    }

    #[test]
    fn orders_evolution_by_full_name_then_lap() {
        let laps = vec![
            lap(1, name("Sebastian", "Vettel"), 2, 90_000, Some(2)),
            lap(1, name("Sebastian", "Vettel"), 1, 93_000, Some(3)),
            lap(2, name("Jenson", "Button"), 1, 92_000, None),
        ];

        let summary = build(race(), laps, Vec::new(), &[]);

        let pace: Vec<(&str, i32)> = summary
            .pace_evolution
            .iter()
            .map(|row| (row.driver.as_str(), row.lap))
            .collect();
        assert_eq!(
            pace,
            vec![
                ("Jenson Button", 1),
                ("Sebastian Vettel", 1),
                ("Sebastian Vettel", 2)
            ]
        );
        assert_eq!(summary.position_evolution[0].position, None);
        assert_eq!(summary.position_evolution[2].position, Some(2));
    }

    #[test]
    fn summarises_pace_per_driver() {
        let laps = vec![
            lap(1, name("Jenson", "Button"), 1, 92_000, Some(1)),
            lap(1, name("Jenson", "Button"), 2, 89_000, Some(1)),
            lap(1, name("Jenson", "Button"), 3, 90_500, Some(1)),
            lap(2, name("Rubens", "Barrichello"), 1, 88_000, Some(2)),
        ];

        let summary = build(race(), laps, Vec::new(), &[]);

        assert_eq!(summary.pace_candlestick.len(), 2);
        let candle = &summary.pace_candlestick[0];
        assert_eq!(candle.driver, "Jenson Button");
        assert_eq!(candle.min, 89_000);
        assert_eq!(candle.max, 92_000);
        assert!((candle.avg - 90_500.0).abs() < 1e-9);

        let best: Vec<(&str, i64)> = summary
            .fastest_laps_per_driver
            .iter()
            .map(|row| (row.driver.as_str(), row.milliseconds))
            .collect();
        assert_eq!(
            best,
            vec![("Rubens Barrichello", 88_000), ("Jenson Button", 89_000)]
        );
    }

    #[test]
    fn laps_without_driver_row_are_left_out_everywhere() {
        let laps = vec![
            lap(1, name("Jenson", "Button"), 1, 92_000, Some(2)),
            lap(9, None, 1, 80_000, Some(1)),
        ];
        let top = vec![
            lap(9, None, 1, 80_000, Some(1)),
            lap(1, name("Jenson", "Button"), 1, 92_000, Some(2)),
        ];

        let summary = build(race(), laps, top, &[winner(9)]);

        assert_eq!(summary.fastest_lap.driver.as_deref(), Some("Jenson Button"));
        assert_eq!(summary.top_fastest_laps.len(), 1);
        assert_eq!(summary.top_fastest_laps[0].position, 1);
        assert_eq!(summary.top_fastest_laps[0].driver, "Button");
        assert_eq!(summary.pace_evolution.len(), 1);
        assert_eq!(summary.position_evolution.len(), 1);
        assert_eq!(summary.pace_candlestick.len(), 1);
        assert_eq!(summary.fastest_laps_per_driver.len(), 1);
        assert_eq!(summary.fastest_lap_timeline.len(), 1);
        assert!(summary.winner_position_changes.is_empty());
        assert!(summary
            .pace_evolution
            .iter()
            .all(|row| row.driver != "Unknown"));
    }

    #[test]
    fn tracks_winner_positions_by_lap() {
        let laps = vec![
            lap(1, name("Jenson", "Button"), 2, 89_500, Some(2)),
            lap(1, name("Jenson", "Button"), 1, 92_000, Some(3)),
            lap(2, name("Rubens", "Barrichello"), 1, 92_800, Some(1)),
        ];

        let summary = build(race(), laps, Vec::new(), &[winner(1)]);

        let changes: Vec<(i32, Option<i32>)> = summary
            .winner_position_changes
            .iter()
            .map(|row| (row.lap, row.position))
            .collect();
        assert_eq!(changes, vec![(1, Some(3)), (2, Some(2))]);

        let timeline: Vec<i32> = summary.fastest_lap_timeline.iter().map(|p| p.lap).collect();
        assert_eq!(timeline, vec![1, 1, 2]);
    }
}
