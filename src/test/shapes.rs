use crate::geometry::{LineString, MultiLineString, MultiPolygon, Point, Polygon};

pub(crate) fn point() -> Point {
    Point::new(0.5, 102.0)
}

pub(crate) fn line_string() -> LineString {
    vec![(-10.0, 102.0), (1.0, 103.0), (0.0, 104.0), (4.0, 130.0)].into()
}

pub(crate) fn polygon() -> Polygon {
    Polygon::new(
        vec![
            (0.0, 101.0),
            (1.0, 101.0),
            (1.0, 100.0),
            (0.0, 100.0),
            (0.0, 101.0),
        ]
        .into(),
        vec![],
    )
}

pub(crate) fn multi_line_string() -> MultiLineString {
    vec![
        LineString::from(vec![(0.0, 100.0), (1.0, 101.0)]),
        LineString::from(vec![(2.0, 102.0), (3.0, 103.0)]),
    ]
    .into()
}

pub(crate) fn multi_polygon() -> MultiPolygon {
    let first = Polygon::new(
        vec![
            (2.0, 102.0),
            (2.0, 103.0),
            (3.0, 103.0),
            (3.0, 102.0),
            (2.0, 102.0),
        ]
        .into(),
        vec![],
    );
    let second = Polygon::new(
        vec![
            (0.0, 100.0),
            (0.0, 101.0),
            (1.0, 101.0),
            (1.0, 100.0),
            (0.0, 100.0),
        ]
        .into(),
        vec![vec![
            (0.2, 100.2),
            (0.2, 100.8),
            (0.8, 100.8),
            (0.8, 100.2),
            (0.2, 100.2),
        ]
        .into()],
    );
    vec![first, second].into()
}

/// A short route through Oklahoma City, `(lat, lng)`.
pub(crate) fn route() -> LineString {
    vec![
        (35.964669147704086, -96.96258544921875),
        (35.87792352995116, -97.39654541015625),
        (35.66622234103479, -97.6409912109375),
        (35.561277754384555, -97.22351074218749),
        (35.45619556834375, -97.54486083984375),
    ]
    .into()
}
