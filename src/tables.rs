use crate::types::{FieldMetadata, SiteMetadata};

pub static SITES: &[SiteMetadata] = &[
    SiteMetadata { code: "tfn", name: "Teide", color: Some("#263c6f") },
    SiteMetadata { code: "elp", name: "McDonald", color: Some("#700000") },
    SiteMetadata { code: "lsc", name: "Cerro Tololo", color: Some("#f04e23") },
    SiteMetadata { code: "cpt", name: "Sutherland", color: Some("#004f00") },
    SiteMetadata { code: "coj", name: "Siding Spring", color: Some("#fac900") },
    SiteMetadata { code: "ogg", name: "Haleakala", color: Some("#3366dd") },
    SiteMetadata { code: "sqa", name: "Sedgwick", color: Some("#009d00") },
    SiteMetadata { code: "ngq", name: "Ali", color: None },
    SiteMetadata { code: "tlv", name: "Wise", color: Some("#8150d7") },
];

pub static OBSERVATORIES: &[(&str, &str)] = &[
    ("doma", "1"),
    ("domb", "2"),
    ("domc", "3"),
    ("clma", ""),
    ("aqwa", "1"),
    ("aqwb", "2"),
];

pub static TELESCOPES: &[(&str, &str)] = &[
    ("1m0a", "1m"),
    ("0m4a", "0.4m A"),
    ("0m4b", "0.4m B"),
    ("0m4c", "0.4m C"),
    ("2m0a", "2m"),
    ("0m8a", "0.8m"),
];

pub static FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        key: "group_id",
        human_readable: "Title",
        description: "Name for this observation request.",
    },
    FieldMetadata {
        key: "ipp_value",
        human_readable: "IPP Value",
        description: "Intra-proposal priority factor applied to the request.",
    },
    FieldMetadata {
        key: "observation_type",
        human_readable: "Observation Mode",
        description: "Normal, rapid response or time critical scheduling.",
    },
    FieldMetadata {
        key: "acceptability_threshold",
        human_readable: "Acceptability Threshold",
        description: "Percentage of the request that must complete for it to be considered done.",
    },
    FieldMetadata {
        key: "max_airmass",
        human_readable: "Maximum Airmass",
        description: "Upper limit on airmass while observing the target.",
    },
    FieldMetadata {
        key: "min_lunar_distance",
        human_readable: "Minimum Lunar Separation",
        description: "Smallest allowed angular distance to the Moon, in degrees.",
    },
    FieldMetadata {
        key: "exposure_time",
        human_readable: "Exposure Time",
        description: "Duration of a single exposure, in seconds.",
    },
    FieldMetadata {
        key: "exposure_count",
        human_readable: "Exposure Count",
        description: "Number of exposures to take.",
    },
    FieldMetadata {
        key: "ra",
        human_readable: "Right Ascension",
        description: "Decimal degrees or HH:MM:SS.",
    },
    FieldMetadata {
        key: "dec",
        human_readable: "Declination",
        description: "Decimal degrees or DD:MM:SS.",
    },
];

pub static COLOR_PALETTE: &[&str] = &[
    "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#3B3EAC", "#0099C6", "#DD4477",
    "#66AA00", "#B82E2E", "#316395", "#994499", "#22AA99", "#AAAA11", "#6633CC", "#E67300",
    "#8B0707", "#329262", "#5574A6", "#3B3EAC", "#FFFF00", "#1CE6FF", "#FF34FF", "#FF4A46",
    "#008941", "#006FA6", "#A30059", "#FFDBE5", "#7A4900", "#0000A6", "#63FFAC", "#B79762",
    "#004D43", "#8FB0FF", "#997D87", "#5A0007", "#809693", "#FEFFE6", "#1B4400", "#4FC601",
    "#61615A", "#BA0900", "#6B7900", "#00C2A0", "#FFAA92", "#FF90C9", "#B903AA", "#D16100",
    "#DDEFFF", "#000035", "#7B4F4B", "#A1C299", "#300018", "#0AA6D8", "#013349", "#00846F",
    "#372101", "#FFB500", "#C2FFED", "#A079BF", "#CC0744", "#C0B9B2", "#C2FF99", "#001E09",
    "#00489C", "#6F0062", "#0CBD66", "#EEC3FF", "#456D75", "#B77B68", "#7A87A1", "#788D66",
    "#885578", "#FAD09F", "#FF8A9A", "#D157A0", "#BEC459", "#456648", "#0086ED", "#886F4C",
    "#34362D", "#B4A8BD", "#00A6AA", "#452C2C", "#636375", "#A3C8C9", "#FF913F", "#938A81",
    "#575329", "#00FECF", "#B05B6F", "#8CD0FF", "#3B9700", "#04F757", "#C8A1A1", "#1E6E00",
    "#7900D7", "#A77500", "#6367A9", "#A05837", "#6B002C", "#772600", "#D790FF", "#9B9700",
    "#549E79", "#FFF69F", "#201625", "#72418F", "#BC23FF", "#99ADC0", "#3A2465", "#922329",
    "#5B4534", "#FDE8DC", "#404E55", "#0089A3", "#CB7E98", "#A4E804", "#324E72", "#6A3A4C",
    "#3B5DFF", "#4A3B53", "#FF2F80",
];

pub(crate) fn lookup<'a>(table: &'a [(&'a str, &'a str)], code: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == code).map(|&(_, v)| v)
}
