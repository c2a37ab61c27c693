use std::fmt;

/// Composes a CSS `transform` value from derived motion values, in the fixed
/// order perspective → rotate → translate → scale so tilt cards read the
/// same as their hand-written counterparts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    perspective: Option<f64>,
    rotate_x: Option<f64>,
    rotate_y: Option<f64>,
    translate_x: Option<f64>,
    translate_y: Option<f64>,
    scale: Option<f64>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn perspective(mut self, px: f64) -> Self {
        self.perspective = Some(px);
        self
    }

    pub fn rotate_x(mut self, deg: f64) -> Self {
        self.rotate_x = Some(deg);
        self
    }

    pub fn rotate_y(mut self, deg: f64) -> Self {
        self.rotate_y = Some(deg);
        self
    }

    pub fn translate_x(mut self, px: f64) -> Self {
        self.translate_x = Some(px);
        self
    }

    pub fn translate_y(mut self, px: f64) -> Self {
        self.translate_y = Some(px);
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        self.scale = Some(factor);
        self
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        let mut sep = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            if wrote {
                write!(f, " ")?;
            }
            wrote = true;
            Ok(())
        };
        if let Some(px) = self.perspective {
            sep(f)?;
            write!(f, "perspective({px:.2}px)")?;
        }
        if let Some(deg) = self.rotate_x {
            sep(f)?;
            write!(f, "rotateX({deg:.2}deg)")?;
        }
        if let Some(deg) = self.rotate_y {
            sep(f)?;
            write!(f, "rotateY({deg:.2}deg)")?;
        }
        if let Some(px) = self.translate_x {
            sep(f)?;
            write!(f, "translateX({px:.2}px)")?;
        }
        if let Some(px) = self.translate_y {
            sep(f)?;
            write!(f, "translateY({px:.2}px)")?;
        }
        if let Some(factor) = self.scale {
            sep(f)?;
            write!(f, "scale({factor:.3})")?;
        }
        if !wrote {
            write!(f, "none")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transform_is_none() {
        assert_eq!(Transform::new().to_string(), "none");
    }

    #[test]
    fn parts_render_in_fixed_order() {
        let t = Transform::new()
            .scale(1.05)
            .translate_y(-8.0)
            .rotate_x(15.0)
            .perspective(1000.0);
        assert_eq!(
            t.to_string(),
            "perspective(1000.00px) rotateX(15.00deg) translateY(-8.00px) scale(1.050)"
        );
    }

    #[test]
    fn single_part_has_no_separator() {
        assert_eq!(Transform::new().scale(0.95).to_string(), "scale(0.950)");
    }
}
