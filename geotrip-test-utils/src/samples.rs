//! The example documents of RFC 7946, as text

/// Appendix A.1 Point
pub const POINT: &str = r#"{
    "type": "Point",
    "coordinates": [100.0, 0.0]
}"#;

/// Appendix A.2 LineString
pub const LINE_STRING: &str = r#"{
    "type": "LineString",
    "coordinates": [
        [100.0, 0.0],
        [101.0, 1.0]
    ]
}"#;

/// Appendix A.3 Polygon with a hole
pub const POLYGON: &str = r#"{
    "type": "Polygon",
    "coordinates": [
        [
            [100.0, 0.0],
            [101.0, 0.0],
            [101.0, 1.0],
            [100.0, 1.0],
            [100.0, 0.0]
        ],
        [
            [100.8, 0.8],
            [100.8, 0.2],
            [100.2, 0.2],
            [100.2, 0.8],
            [100.8, 0.8]
        ]
    ]
}"#;

/// Appendix A.4 MultiPoint
pub const MULTI_POINT: &str = r#"{
    "type": "MultiPoint",
    "coordinates": [
        [100.0, 0.0],
        [101.0, 1.0]
    ]
}"#;

/// Appendix A.5 MultiLineString
pub const MULTI_LINE_STRING: &str = r#"{
    "type": "MultiLineString",
    "coordinates": [
        [
            [100.0, 0.0],
            [101.0, 1.0]
        ],
        [
            [102.0, 2.0],
            [103.0, 3.0]
        ]
    ]
}"#;

/// Appendix A.6 MultiPolygon
pub const MULTI_POLYGON: &str = r#"{
    "type": "MultiPolygon",
    "coordinates": [
        [
            [
                [102.0, 2.0],
                [103.0, 2.0],
                [103.0, 3.0],
                [102.0, 3.0],
                [102.0, 2.0]
            ]
        ],
        [
            [
                [100.0, 0.0],
                [101.0, 0.0],
                [101.0, 1.0],
                [100.0, 1.0],
                [100.0, 0.0]
            ],
            [
                [100.2, 0.2],
                [100.2, 0.8],
                [100.8, 0.8],
                [100.8, 0.2],
                [100.2, 0.2]
            ]
        ]
    ]
}"#;

/// Appendix A.7 GeometryCollection
pub const GEOMETRY_COLLECTION: &str = r#"{
    "type": "GeometryCollection",
    "geometries": [{
        "type": "Point",
        "coordinates": [100.0, 0.0]
    }, {
        "type": "LineString",
        "coordinates": [
            [101.0, 0.0],
            [102.0, 1.0]
        ]
    }]
}"#;

/// Section 1.5 FeatureCollection
pub const FEATURE_COLLECTION: &str = r#"{
    "type": "FeatureCollection",
    "features": [{
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [102.0, 0.5]
        },
        "properties": {
            "prop0": "value0"
        }
    }, {
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": [
                [102.0, 0.0],
                [103.0, 1.0],
                [104.0, 0.0],
                [105.0, 1.0]
            ]
        },
        "properties": {
            "prop0": "value0",
            "prop1": 0.0
        }
    }, {
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [
                [
                    [100.0, 0.0],
                    [101.0, 0.0],
                    [101.0, 1.0],
                    [100.0, 1.0],
                    [100.0, 0.0]
                ]
            ]
        },
        "properties": {
            "prop0": "value0",
            "prop1": {
                "this": "that"
            }
        }
    }]
}"#;

/// Section 5 FeatureCollection with a bbox
pub const BBOX_FEATURE_COLLECTION: &str = r#"{
    "type": "FeatureCollection",
    "bbox": [100.0, 0.0, -100.0, 105.0, 1.0, 0.0],
    "features": []
}"#;

/// Section 3.2 Feature with a string id and null geometry
pub const NULL_GEOMETRY_FEATURE: &str = r#"{
    "type": "Feature",
    "id": "f-1",
    "geometry": null,
    "properties": null
}"#;

/// Every sample, labelled
pub const ALL: [(&str, &str); 10] = [
    ("point", POINT),
    ("line_string", LINE_STRING),
    ("polygon", POLYGON),
    ("multi_point", MULTI_POINT),
    ("multi_line_string", MULTI_LINE_STRING),
    ("multi_polygon", MULTI_POLYGON),
    ("geometry_collection", GEOMETRY_COLLECTION),
    ("feature_collection", FEATURE_COLLECTION),
    ("bbox_feature_collection", BBOX_FEATURE_COLLECTION),
    ("null_geometry_feature", NULL_GEOMETRY_FEATURE),
];
