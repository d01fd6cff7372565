mod constructor;
mod lap_time;
mod qualifying;
mod race;
mod result;
