use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: Cow<'static, str>,
    /// Pixel size.
    pub px: f32,
}

impl Font {
    pub fn new(family: impl Into<Cow<'static, str>>, px: f32) -> Self {
        Self {
            family: family.into(),
            px,
        }
    }

    /// Point sizes as written in stage assets (`10pt` at 96 dpi).
    pub fn from_points(family: impl Into<Cow<'static, str>>, pt: f32) -> Self {
        Self::new(family, pt * 4.0 / 3.0)
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::from_points("NanumGothic", 10.0)
    }
}
