pub mod archive;
pub mod calendar;
pub mod coordinates;
pub mod error;
pub mod formatter;
pub mod http;
pub mod tables;
pub mod timeline;
pub mod types;

pub use archive::{
    archive_auth_header, bearer_auth_header, frame_ids_for_download, frames_for_request_url,
    latest_frame_url, requires_archive_token, thumbnail_url, token_auth_url, zip_download_form,
    zip_download_url, ArchiveConfig, Frame, FramePage,
};

pub use calendar::{
    arc_default_exposure_time, format_date, julian_text_to_modified_julian,
    julian_to_modified_julian, lamp_flat_default_exposure_time, semester_bounds,
    semester_bounds_at, semester_end, semester_start, slit_width_to_exposure_time,
    DATETIME_FORMAT, MJD_EPOCH,
};

pub use coordinates::{
    decimal_dec_to_sexagesimal, decimal_ra_to_sexagesimal, parse_sexagesimal_dec,
    parse_sexagesimal_ra, sexagesimal_dec_to_decimal, sexagesimal_ra_to_decimal,
    DEGREES_PER_HOUR,
};

pub use error::{ArchiveError, CoordinateError};

pub use formatter::{
    display_value, extract_top_level_errors, field_metadata, format_field, format_value,
    get_field_description, palette_color, readable_site_name, site_color, site_metadata,
};

pub use http::{
    add_csrf_header, decode_component, get_cookie, is_csrf_safe_method, parse_query_string,
    CSRF_COOKIE, CSRF_HEADER,
};

pub use timeline::{needs_update, zoom};

pub use types::{
    AngleKind, FieldMetadata, InstrumentFamily, PlotWindow, QueryValue, SemesterBoundary,
    Sexagesimal, SiteMetadata,
};
