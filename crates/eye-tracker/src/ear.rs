//! Eye aspect ratio computation

fn euclidean(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Compute the eye aspect ratio from six boundary points ordered
/// (p1..p6): outer corner, two upper lid points, inner corner, two lower
/// lid points.
///
/// EAR = (‖p2−p6‖ + ‖p3−p5‖) / (2·‖p1−p4‖)
///
/// Near 0 for a closed eye, around 0.3 for an open one. Degenerate
/// geometry (zero eye width) reads as fully open so it cannot start the
/// closure timer.
pub fn eye_aspect_ratio(points: &[(f32, f32); 6]) -> f32 {
    let a = euclidean(points[1], points[5]);
    let b = euclidean(points[2], points[4]);
    let c = euclidean(points[0], points[3]);

    if c <= f32::EPSILON {
        return 1.0;
    }
    (a + b) / (2.0 * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_eye_ratio() {
        // Eye 40px wide, lids 12px apart
        let points = [
            (0.0, 0.0),
            (10.0, -6.0),
            (30.0, -6.0),
            (40.0, 0.0),
            (30.0, 6.0),
            (10.0, 6.0),
        ];
        let ear = eye_aspect_ratio(&points);
        assert!((ear - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_closed_eye_ratio_near_zero() {
        let points = [
            (0.0, 0.0),
            (10.0, -0.5),
            (30.0, -0.5),
            (40.0, 0.0),
            (30.0, 0.5),
            (10.0, 0.5),
        ];
        assert!(eye_aspect_ratio(&points) < 0.05);
    }

    #[test]
    fn test_degenerate_geometry_reads_open() {
        let points = [(5.0, 5.0); 6];
        assert_eq!(eye_aspect_ratio(&points), 1.0);
    }
}
