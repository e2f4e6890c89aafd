mod entities;
mod matcher_props;
mod numeric_roundtrip;
mod unescape;
mod utils;
