//! Unit tests for nav-route.

#[cfg(test)]
mod helpers {
    use nav_core::Point;
    use nav_spatial::{RoadNetwork, RoadNetworkBuilder, Segment};

    use crate::building::{BuildingDirectory, BuildingRecord};
    use crate::{Rect, RoutePlanner};

    pub const SNAP_TOLERANCE: f32 = 5.0;

    /// Three-hub corridor: top (400,90) — mid (400,340) — left (230,340),
    /// with the vertical x=400 and horizontal y=340 roads.
    pub fn corridor_network() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        let top = b.add_hub("top", Point::new(400.0, 90.0));
        let mid = b.add_hub("mid", Point::new(400.0, 340.0));
        let left = b.add_hub("left", Point::new(230.0, 340.0));
        b.connect(top, mid);
        b.connect(mid, left);
        b.add_segment(Segment::vertical(400.0, 90.0, 590.0));
        b.add_segment(Segment::horizontal(340.0, 230.0, 570.0));
        b.build().unwrap()
    }

    /// Library center: (150, 340).  Plaza Kiosk center: (400, 340) — on-road,
    /// exactly at the mid hub.  Annex center: (230, 338) — 2 units off-road,
    /// within the snap tolerance.
    pub fn directory() -> BuildingDirectory {
        BuildingDirectory::from_records(vec![
            BuildingRecord {
                name: "Library".into(),
                rect: Rect { x: 100.0, y: 300.0, width: 100.0, height: 80.0 },
            },
            BuildingRecord {
                name: "Plaza Kiosk".into(),
                rect: Rect { x: 375.0, y: 315.0, width: 50.0, height: 50.0 },
            },
            BuildingRecord {
                name: "Annex".into(),
                rect: Rect { x: 205.0, y: 313.0, width: 50.0, height: 50.0 },
            },
        ])
    }

    pub fn planner(network: &RoadNetwork) -> RoutePlanner<'_> {
        RoutePlanner::new(network, SNAP_TOLERANCE)
    }
}

// ── Buildings ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod building {
    use std::io::Cursor;

    use nav_core::Point;

    use crate::building::{BuildingDirectory, BuildingRecord};
    use crate::{PlanError, Rect};

    #[test]
    fn rect_center() {
        let rect = Rect { x: 100.0, y: 300.0, width: 100.0, height: 80.0 };
        assert_eq!(rect.center(), Point::new(150.0, 340.0));
    }

    #[test]
    fn lookup_by_name() {
        let dir = super::helpers::directory();
        assert_eq!(dir.len(), 3);
        let library = dir.get("Library").unwrap();
        assert_eq!(library.center(), Point::new(150.0, 340.0));
        assert!(dir.get("Observatory").is_none());
    }

    #[test]
    fn duplicate_name_keeps_first() {
        let dir = BuildingDirectory::from_records(vec![
            BuildingRecord {
                name: "Hall".into(),
                rect: Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 },
            },
            BuildingRecord {
                name: "Hall".into(),
                rect: Rect { x: 100.0, y: 100.0, width: 10.0, height: 10.0 },
            },
        ]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("Hall").unwrap().center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn json_roundtrip() {
        let json = r#"[
            { "name": "Library", "rect": { "x": 100.0, "y": 300.0, "width": 100.0, "height": 80.0 } }
        ]"#;
        let dir = BuildingDirectory::from_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(dir.iter().count(), 1);
        assert_eq!(dir.get("Library").unwrap().center(), Point::new(150.0, 340.0));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = BuildingDirectory::from_json_reader(Cursor::new("[ nope"));
        assert!(matches!(result, Err(PlanError::Parse(_))));
    }
}

// ── Planning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use nav_core::Point;
    use nav_spatial::{RoadNetworkBuilder, Segment};

    use crate::PlanError;

    use super::helpers;

    #[test]
    fn corridor_scenario() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        let route = planner
            .plan(Some(Point::new(400.0, 50.0)), "Library", &dir)
            .unwrap();

        // Hub path runs top → mid → left.
        let idents: Vec<_> = route.hub_path.iter().map(|&h| net.hub_ident(h)).collect();
        assert_eq!(idents, ["top", "mid", "left"]);

        assert_eq!(
            route.waypoints,
            vec![
                Point::new(400.0, 50.0),  // origin
                Point::new(400.0, 90.0),  // snapped onto the vertical road
                Point::new(400.0, 340.0), // mid hub
                Point::new(230.0, 340.0), // left hub (also the snapped center)
                Point::new(150.0, 340.0), // destination center
            ]
        );
        assert!((route.total_length - 540.0).abs() < 1e-3);
    }

    #[test]
    fn first_and_last_waypoints() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        let origin = Point::new(317.0, 211.0);
        let route = planner.plan(Some(origin), "Library", &dir).unwrap();
        assert_eq!(route.waypoints[0], origin);
        assert_eq!(*route.waypoints.last().unwrap(), Point::new(150.0, 340.0));
    }

    #[test]
    fn no_consecutive_duplicates() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        for name in ["Library", "Plaza Kiosk", "Annex"] {
            let route = planner.plan(Some(Point::new(400.0, 50.0)), name, &dir).unwrap();
            for w in route.waypoints.windows(2) {
                assert!(
                    !w[0].approx_eq(w[1], 1e-3),
                    "duplicate adjacent waypoints {} / {} in route to {name}",
                    w[0],
                    w[1]
                );
            }
        }
    }

    #[test]
    fn replanning_is_idempotent() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        let a = planner.plan(Some(Point::new(400.0, 50.0)), "Library", &dir).unwrap();
        let b = planner.plan(Some(Point::new(400.0, 50.0)), "Library", &dir).unwrap();
        assert_eq!(a.waypoints, b.waypoints);
        assert_eq!(a.total_length, b.total_length);
    }

    #[test]
    fn near_road_destination_skips_snap_leg() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        // Annex center (230, 338) is 2 units from the road — inside the
        // tolerance, so the route ends hub → center with no snap leg.
        let route = planner.plan(Some(Point::new(400.0, 50.0)), "Annex", &dir).unwrap();
        let n = route.waypoints.len();
        assert_eq!(route.waypoints[n - 2], Point::new(230.0, 340.0)); // left hub
        assert_eq!(route.waypoints[n - 1], Point::new(230.0, 338.0)); // center
    }

    #[test]
    fn degenerate_route_collapses() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        // Origin already at the Plaza Kiosk center, which sits on a hub.
        let route = planner
            .plan(Some(Point::new(400.0, 340.0)), "Plaza Kiosk", &dir)
            .unwrap();
        assert!(route.is_degenerate());
        assert!(route.waypoint_count() <= 2);
        assert_eq!(route.total_length, 0.0);
        assert_eq!(route.waypoints[0], Point::new(400.0, 340.0));
    }

    #[test]
    fn unknown_destination() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        let result = planner.plan(Some(Point::new(400.0, 50.0)), "Observatory", &dir);
        assert!(matches!(
            result,
            Err(PlanError::UnknownDestination(name)) if name == "Observatory"
        ));
    }

    #[test]
    fn missing_origin() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        let result = planner.plan(None, "Library", &dir);
        assert!(matches!(result, Err(PlanError::NoOrigin)));
    }

    #[test]
    fn disconnected_network_is_routing_error() {
        let mut b = RoadNetworkBuilder::new();
        b.add_hub("west", Point::new(0.0, 0.0));
        b.add_hub("east", Point::new(1000.0, 0.0));
        // Two separate roads, no links between the hubs.
        b.add_segment(Segment::horizontal(0.0, 0.0, 100.0));
        b.add_segment(Segment::horizontal(0.0, 900.0, 1000.0));
        let net = b.build().unwrap();
        let dir = helpers::directory(); // Library center (150, 340) snaps west
        let planner = helpers::planner(&net);

        // Origin near the east road, destination snapping to the west one.
        let result = planner.plan(Some(Point::new(950.0, 10.0)), "Library", &dir);
        assert!(matches!(result, Err(PlanError::Routing(_))));
    }

    #[test]
    fn travel_time_estimate() {
        let net = helpers::corridor_network();
        let dir = helpers::directory();
        let planner = helpers::planner(&net);

        let route = planner.plan(Some(Point::new(400.0, 50.0)), "Library", &dir).unwrap();
        assert!((route.estimated_travel_time(0.05) - 540.0 / 0.05).abs() < 1e-2);
    }
}
