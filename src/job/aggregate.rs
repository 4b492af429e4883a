use std::collections::BTreeMap;

use geo::{Coord, LineString, Polygon};
use tracing::debug;

use crate::{annotation::{Annotation, FeatureStyle}, geom::convex_hull, record::PoleRecord};

const HULL_COLOR: &str = "black";

/// Boundary polygon enclosing all poles of one job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobHullFeature {
    pub job_name: String,
    ring: LineString<f64>,
    style: FeatureStyle,
}

impl JobHullFeature {
    /// Build a hull feature from an open hull boundary; the ring is closed here.
    fn new(job_name: &str, hull: Vec<Coord<f64>>) -> Self {
        let mut ring = LineString::from(hull);
        ring.close();
        Self {
            job_name: job_name.to_string(),
            ring,
            style: FeatureStyle {
                color: HULL_COLOR.into(),
                label: Some(job_name.to_string()),
                ..Default::default()
            },
        }
    }

    /// Closed ring of `(lon, lat)` coordinates; the first point is repeated at the end.
    #[inline] pub fn ring(&self) -> &LineString<f64> { &self.ring }

    /// Label text drawn at the hull; the job name unless edited.
    #[inline] pub fn label(&self) -> Option<&str> { self.style.label.as_deref() }

    /// The ring as a polygon.
    #[inline] pub fn polygon(&self) -> Polygon<f64> { Polygon::new(self.ring.clone(), vec![]) }
}

impl Annotation for JobHullFeature {
    fn style(&self) -> FeatureStyle { self.style.clone() }

    fn set_style(&mut self, style: &FeatureStyle) { self.style = style.clone() }

    fn is_job_label(&self) -> bool { true }
}

/// Group records by job name and compute one hull feature per job.
///
/// Jobs with fewer than 3 distinct positions, or whose positions are collinear,
/// have no polygon boundary and produce no feature. Output is ordered by job name.
pub fn aggregate(records: &[PoleRecord]) -> Vec<JobHullFeature> {
    let mut jobs = BTreeMap::<&str, Vec<Coord<f64>>>::new();
    for record in records {
        jobs.entry(record.job_name.as_str()).or_default().push(record.coord());
    }

    let hulls = jobs.iter()
        .filter_map(|(job_name, points)| {
            let hull = convex_hull(points);
            (hull.len() >= 3).then(|| JobHullFeature::new(job_name, hull))
        })
        .collect::<Vec<_>>();

    debug!(jobs = jobs.len(), hulls = hulls.len(), "aggregated job hulls");
    hulls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pole(job: &str, lat: f64, lon: f64) -> PoleRecord {
        PoleRecord::new(job, "1", lat, lon)
    }

    #[test]
    fn triangle_job_produces_closed_ring() {
        let hulls = aggregate(&[pole("J1", 10.0, 10.0), pole("J1", 10.0, 11.0), pole("J1", 11.0, 10.0)]);
        assert_eq!(hulls.len(), 1);

        let ring = hulls[0].ring().0.clone();
        assert_eq!(ring, vec![
            Coord { x: 10.0, y: 10.0 },
            Coord { x: 11.0, y: 10.0 },
            Coord { x: 10.0, y: 11.0 },
            Coord { x: 10.0, y: 10.0 },
        ]);
        assert!(hulls[0].ring().is_closed());
    }

    #[test]
    fn degenerate_jobs_have_no_hull() {
        let records = [
            pole("two", 0.0, 0.0), pole("two", 1.0, 1.0),
            pole("dupes", 0.0, 0.0), pole("dupes", 0.0, 0.0), pole("dupes", 1.0, 0.0),
            pole("line", 0.0, 0.0), pole("line", 1.0, 1.0), pole("line", 2.0, 2.0),
        ];
        assert!(aggregate(&records).is_empty());
    }

    #[test]
    fn groups_interleaved_records_by_job() {
        let records = [
            pole("B", 0.0, 0.0), pole("A", 5.0, 5.0), pole("B", 0.0, 1.0),
            pole("A", 5.0, 6.0), pole("B", 1.0, 0.0), pole("A", 6.0, 5.0),
        ];
        let hulls = aggregate(&records);
        let names = hulls.iter().map(|h| h.job_name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn hull_style_defaults() {
        let hulls = aggregate(&[pole("J9", 0.0, 0.0), pole("J9", 0.0, 1.0), pole("J9", 1.0, 0.0)]);
        let style = hulls[0].style();
        assert_eq!(style.color, "black");
        assert_eq!(style.label.as_deref(), Some("J9"));
        assert_eq!(style.label_size, 10);
        assert_eq!(style.opacity, 0.95);
        assert!(hulls[0].is_job_label());
    }
}
