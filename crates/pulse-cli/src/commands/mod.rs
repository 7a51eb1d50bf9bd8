pub mod dispatch;
pub mod health;
pub mod kpi;
pub mod kpis;
pub mod matching;
pub mod targets;

#[cfg(test)]
pub(crate) mod fixtures;
