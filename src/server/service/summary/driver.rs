//! Drivers tab: winner, pole, fastest lap and the classification table.

use std::cmp::Ordering;

use crate::{
    model::driver_summary::{
        DriverFastestLapDetailDto, DriverResultRowDto, PolePositionDto, RaceDriverSummaryDto,
        RaceWinnerDto,
    },
    server::{
        model::{
            driver::full_name_or_unknown,
            lap_time::DriverLap,
            qualifying::QualifyingTime,
            result::{team_or_unknown, RaceResult},
        },
        util::format::{format_gap, format_lap_time},
    },
};

/// Assembles the drivers tab payload.
///
/// # Arguments
/// - `results` - Race classification in storage order
/// - `qualifying` - Qualifying rows of the race
/// - `fastest` - The single fastest lap of the race, if any lap was recorded
pub fn build(
    results: Vec<RaceResult>,
    qualifying: Vec<QualifyingTime>,
    fastest: Option<DriverLap>,
) -> RaceDriverSummaryDto {
    let winner = results.iter().find(|result| result.position.is_winner());

    let race_winner = winner.map(|result| RaceWinnerDto {
        driver: full_name_or_unknown(result.driver.as_ref()),
        team: team_or_unknown(result.team.as_deref()),
        time: result.time.clone(),
    });

    let fastest_lap = fastest.map(|lap| DriverFastestLapDetailDto {
        driver: full_name_or_unknown(lap.driver.as_ref()),
        team: results
            .iter()
            .find(|result| result.driver_id == lap.driver_id)
            .and_then(|result| result.team.clone()),
        lap: lap.lap,
        time: format_lap_time(Some(lap.milliseconds)),
    });

    let leader_ms = winner.and_then(|result| result.milliseconds);

    RaceDriverSummaryDto {
        race_winner,
        pole_position: pole_position(&qualifying),
        fastest_lap,
        results: result_rows(&results, leader_ms),
    }
}

/// Qualifying row with the lowest Q3 time; ties go to the first row.
fn pole_position(qualifying: &[QualifyingTime]) -> Option<PolePositionDto> {
    let mut pole: Option<(i64, &QualifyingTime)> = None;
    for row in qualifying {
        let Some(ms) = row.q3_milliseconds() else {
            continue;
        };
        match pole {
            Some((best, _)) if best <= ms => {}
            _ => pole = Some((ms, row)),
        }
    }

    pole.map(|(_, row)| PolePositionDto {
        driver: full_name_or_unknown(row.driver.as_ref()),
        team: team_or_unknown(row.team.as_deref()),
        time: row.q3.clone().unwrap_or_default(),
    })
}

/// Orders by total race time, results without a time last.
fn by_race_time(a: &&RaceResult, b: &&RaceResult) -> Ordering {
    match (a.milliseconds, b.milliseconds) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Classification rows with gap to the leader and the running sum of those gaps.
///
/// The winner row (position 1) and rows without a total time have neither gap nor
/// interval and do not add to the running sum.
fn result_rows(results: &[RaceResult], leader_ms: Option<i64>) -> Vec<DriverResultRowDto> {
    let mut ordered: Vec<&RaceResult> = results.iter().collect();
    ordered.sort_by(by_race_time);

    let mut cumulative = 0_i64;
    ordered
        .into_iter()
        .map(|result| {
            let behind = if result.position.is_winner() {
                None
            } else {
                leader_ms
                    .zip(result.milliseconds)
                    .map(|(leader, ms)| ms - leader)
            };

            let (gap, interval) = match behind {
                Some(diff) => {
                    cumulative += diff;
                    (format_gap(diff), format_gap(cumulative))
                }
                None => (String::new(), String::new()),
            };

            DriverResultRowDto {
                position: result.position.value(),
                driver: full_name_or_unknown(result.driver.as_ref()),
                team: team_or_unknown(result.team.as_deref()),
                time: result.time.clone(),
                gap,
                interval,
                points: result.points,
                laps: result.laps,
            }
        })
        .collect()
}
