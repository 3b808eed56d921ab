use rushroute::RoadClass;

// WayProperties tells whether a car can use the way, and in which direction
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WayProperties {
    // None when cars aren't allowed on the way
    pub road_class: Option<RoadClass>,
    pub oneway: bool,
}

impl WayProperties {
    // Drivable means that a car can use the way in at least one direction
    pub fn drivable(self) -> bool {
        self.road_class.is_some()
    }

    pub fn backward(self) -> bool {
        !self.oneway
    }

    pub fn update(&mut self, key: &str, val: &str) {
        match key {
            // http://wiki.openstreetmap.org/wiki/Key:highway
            "highway" => match val {
                "motorway" | "motorway_link" | "trunk" | "trunk_link" | "primary"
                | "primary_link" | "secondary" | "tertiary" | "residential" | "living_street" => {
                    self.road_class = Some(RoadClass::from_tag(val));
                }
                "unclassified" | "road" | "service" | "track" | "secondary_link"
                | "tertiary_link" => {
                    self.road_class = Some(RoadClass::Unclassified);
                }
                _ => {}
            },
            "oneway" => match val {
                "yes" | "true" | "1" => self.oneway = true,
                _ => {}
            },
            "junction" => {
                if val == "roundabout" {
                    self.oneway = true;
                }
            }
            _ => {}
        }
    }
}

#[test]
fn test_drivable() {
    let mut p = WayProperties::default();
    assert!(!p.drivable());

    p.update("highway", "footway");
    assert!(!p.drivable());

    p.update("highway", "cycleway");
    assert!(!p.drivable());

    p.update("highway", "service");
    assert!(p.drivable());
}

#[test]
fn test_update() {
    let mut p = WayProperties::default();
    p.update("highway", "secondary");
    assert_eq!(Some(RoadClass::Secondary), p.road_class);

    p.update("highway", "primary_link");
    assert_eq!(Some(RoadClass::PrimaryLink), p.road_class);

    p.update("highway", "motorway");
    assert_eq!(Some(RoadClass::Motorway), p.road_class);

    p.update("highway", "living_street");
    assert_eq!(Some(RoadClass::LivingStreet), p.road_class);

    p.update("highway", "track");
    assert_eq!(Some(RoadClass::Unclassified), p.road_class);

    p.update("highway", "tertiary_link");
    assert_eq!(Some(RoadClass::Unclassified), p.road_class);
}

#[test]
fn test_oneway() {
    let mut p = WayProperties::default();
    p.update("highway", "residential");
    assert!(p.backward());

    p.update("oneway", "no");
    assert!(p.backward());

    p.update("oneway", "yes");
    assert!(!p.backward());

    let mut p = WayProperties::default();
    p.update("junction", "roundabout");
    assert!(p.oneway);

    let mut p = WayProperties::default();
    p.update("junction", "circular");
    assert!(!p.oneway);
}
