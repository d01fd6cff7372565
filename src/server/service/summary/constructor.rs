//! Constructors tab: per-team rollups and average running position per lap.

use std::collections::{BTreeMap, HashMap};

use crate::{
    model::constructor_summary::{
        BestFinisherDto, ConstructorLapPositionDto, ConstructorResultDto, DriverPointsDto,
        MostPointsDto, RaceConstructorSummaryDto,
    },
    server::{
        model::{
            driver::full_name_or_unknown,
            lap_time::DriverLap,
            result::{team_or_unknown, RaceResult},
        },
        util::format::round_to,
    },
};

/// Results of one constructor, accumulated in fetch order.
struct ConstructorGroup {
    team: String,
    drivers: Vec<String>,
    positions: Vec<i32>,
    points: f64,
    laps: i64,
}

impl ConstructorGroup {
    fn best_position(&self) -> Option<i32> {
        self.positions.iter().copied().min()
    }

    fn avg_position(&self) -> Option<f64> {
        if self.positions.is_empty() {
            return None;
        }

        let total: i64 = self.positions.iter().map(|&p| i64::from(p)).sum();
        Some(round_to(total as f64 / self.positions.len() as f64, 2))
    }
}

/// Assembles the constructors tab payload.
///
/// # Arguments
/// - `results` - Race classification in storage order
/// - `laps` - Every lap of the race
pub fn build(results: Vec<RaceResult>, laps: Vec<DriverLap>) -> RaceConstructorSummaryDto {
    let groups = group_by_constructor(&results);

    let mut best_finisher: Option<BestFinisherDto> = None;
    for group in &groups {
        let Some(position) = group.best_position() else {
            continue;
        };
        match &best_finisher {
            Some(best) if best.position <= position => {}
            _ => {
                best_finisher = Some(BestFinisherDto {
                    team: group.team.clone(),
                    position,
                })
            }
        }
    }

    let mut most_points: Option<MostPointsDto> = None;
    for group in &groups {
        match &most_points {
            Some(most) if most.points >= group.points => {}
            _ => {
                most_points = Some(MostPointsDto {
                    team: group.team.clone(),
                    points: group.points,
                })
            }
        }
    }

    let driver_points = results
        .iter()
        .map(|result| DriverPointsDto {
            constructor: team_or_unknown(result.team.as_deref()),
            driver: full_name_or_unknown(result.driver.as_ref()),
            points: result.points.unwrap_or(0.0),
        })
        .collect();

    let position_evolution = position_evolution(&results, &laps);

    RaceConstructorSummaryDto {
        best_finisher,
        most_points,
        results: groups
            .iter()
            .map(|group| ConstructorResultDto {
                team: group.team.clone(),
                drivers: group.drivers.join(", "),
                best_position: group.best_position(),
                avg_position: group.avg_position(),
                total_points: group.points,
                laps_completed: group.laps,
            })
            .collect(),
        driver_points,
        position_evolution,
    }
}

/// Groups results by constructor, keeping the order in which constructors first appear.
fn group_by_constructor(results: &[RaceResult]) -> Vec<ConstructorGroup> {
    let mut index: HashMap<i32, usize> = HashMap::new();
    let mut groups: Vec<ConstructorGroup> = Vec::new();

    for result in results {
        let slot = *index.entry(result.constructor_id).or_insert_with(|| {
            groups.push(ConstructorGroup {
                team: team_or_unknown(result.team.as_deref()),
                drivers: Vec::new(),
                positions: Vec::new(),
                points: 0.0,
                laps: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.drivers.push(full_name_or_unknown(result.driver.as_ref()));
        if let Some(position) = result.position.value() {
            group.positions.push(position);
        }
        group.points += result.points.unwrap_or(0.0);
        group.laps += i64::from(result.laps.unwrap_or(0));
    }

    groups
}

/// Mean running position of each constructor's drivers on every lap.
///
/// Drivers are assigned to constructors through their race result; laps without a
/// recorded position or of drivers without a result are skipped. Ordered by lap, then
/// team name.
fn position_evolution(results: &[RaceResult], laps: &[DriverLap]) -> Vec<ConstructorLapPositionDto> {
    let mut teams: HashMap<i32, (i32, String)> = HashMap::new();
    for result in results {
        teams
            .entry(result.driver_id)
            .or_insert_with(|| (result.constructor_id, team_or_unknown(result.team.as_deref())));
    }

    // (lap, team, constructor id) -> (sum of positions, number of drivers)
    let mut totals: BTreeMap<(i32, String, i32), (i64, u32)> = BTreeMap::new();
    for lap in laps {
        let Some(position) = lap.position.value() else {
            continue;
        };
        let Some((constructor_id, team)) = teams.get(&lap.driver_id) else {
            continue;
        };

        let entry = totals
            .entry((lap.lap, team.clone(), *constructor_id))
            .or_insert((0, 0));
        entry.0 += i64::from(position);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|((lap, team, _), (sum, count))| ConstructorLapPositionDto {
            team,
            lap,
            position: sum as f64 / f64::from(count),
        })
        .collect()
}
