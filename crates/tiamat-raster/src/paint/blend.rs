use crate::pixel::Pixel;

/// Porter-Duff compositing modes over premultiplied pixels.
///
/// Every mode is composed from two primitives:
/// - `in(x, a)  = x * a / 255`
/// - `out(x, a) = x * (255 - a) / 255`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendMode {
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcATop,
    DstATop,
    Xor,
}

impl BlendMode {
    /// Collapses the mode given the paint's source alpha, ahead of scan
    /// conversion.
    ///
    /// With zero source alpha, SrcIn/DstIn/SrcOut/DstATop all produce the
    /// cleared pixel, so they resolve to `Clear`. A draw whose resolved mode
    /// is `Dst` writes nothing and should be skipped entirely.
    pub fn resolve(self, alpha: f32) -> BlendMode {
        match self {
            BlendMode::SrcIn | BlendMode::DstIn | BlendMode::SrcOut | BlendMode::DstATop
                if alpha == 0.0 =>
            {
                BlendMode::Clear
            }
            mode => mode,
        }
    }

    /// Composites `src` over/into `dst` per this mode.
    pub fn apply(self, src: Pixel, dst: Pixel) -> Pixel {
        match self {
            BlendMode::Clear => Pixel::TRANSPARENT,
            BlendMode::Src => src,
            BlendMode::Dst => dst,
            BlendMode::SrcOver => src.sum(dst_out(src, dst)),
            BlendMode::DstOver => dst.sum(src_out(src, dst)),
            BlendMode::SrcIn => src_in(src, dst),
            BlendMode::DstIn => dst_in(src, dst),
            BlendMode::SrcOut => src_out(src, dst),
            BlendMode::DstOut => dst_out(src, dst),
            BlendMode::SrcATop => src_in(src, dst).sum(dst_out(src, dst)),
            BlendMode::DstATop => dst_in(src, dst).sum(src_out(src, dst)),
            BlendMode::Xor => dst_out(src, dst).sum(src_out(src, dst)),
        }
    }
}

#[inline]
fn src_in(src: Pixel, dst: Pixel) -> Pixel {
    src.scale_div255(dst.alpha())
}

#[inline]
fn dst_in(src: Pixel, dst: Pixel) -> Pixel {
    dst.scale_div255(src.alpha())
}

#[inline]
fn src_out(src: Pixel, dst: Pixel) -> Pixel {
    src.scale_div255(255 - dst.alpha())
}

#[inline]
fn dst_out(src: Pixel, dst: Pixel) -> Pixel {
    dst.scale_div255(255 - src.alpha())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPAQUE_RED: Pixel = Pixel::from_bits(0xFFFF_0000);
    const OPAQUE_GREEN: Pixel = Pixel::from_bits(0xFF00_FF00);
    const HALF_WHITE: Pixel = Pixel::from_bits(0x8080_8080);

    // ── src-over ──────────────────────────────────────────────────────────

    #[test]
    fn src_over_with_opaque_source_replaces() {
        assert_eq!(BlendMode::SrcOver.apply(OPAQUE_RED, OPAQUE_GREEN), OPAQUE_RED);
    }

    #[test]
    fn src_over_with_transparent_source_keeps_dst() {
        assert_eq!(BlendMode::SrcOver.apply(Pixel::TRANSPARENT, OPAQUE_GREEN), OPAQUE_GREEN);
    }

    #[test]
    fn src_over_half_coverage() {
        // 0x80 + 0xFF*(255-128)/255 = 128 + 127 = 255 alpha; red = 128.
        let out = BlendMode::SrcOver.apply(HALF_WHITE, Pixel::from_bits(0xFF00_0000));
        assert_eq!(out.alpha(), 255);
        assert_eq!(out.red(), 128);
    }

    // ── mode algebra ──────────────────────────────────────────────────────

    #[test]
    fn xor_of_opaque_pixels_cancels() {
        let out = BlendMode::Xor.apply(OPAQUE_RED, OPAQUE_GREEN);
        assert_eq!(out, Pixel::TRANSPARENT);
    }

    #[test]
    fn src_in_keeps_source_where_dst_covers() {
        assert_eq!(BlendMode::SrcIn.apply(OPAQUE_RED, OPAQUE_GREEN), OPAQUE_RED);
        assert_eq!(BlendMode::SrcIn.apply(OPAQUE_RED, Pixel::TRANSPARENT), Pixel::TRANSPARENT);
    }

    #[test]
    fn dst_atop_with_opaque_source_keeps_dst_colors() {
        assert_eq!(BlendMode::DstATop.apply(OPAQUE_RED, OPAQUE_GREEN), OPAQUE_GREEN);
    }

    // ── resolution policy ─────────────────────────────────────────────────

    #[test]
    fn zero_alpha_collapses_the_four_in_out_modes() {
        for mode in [BlendMode::SrcIn, BlendMode::DstIn, BlendMode::SrcOut, BlendMode::DstATop] {
            assert_eq!(mode.resolve(0.0), BlendMode::Clear);
            assert_eq!(mode.resolve(0.5), mode);
        }
    }

    #[test]
    fn other_modes_resolve_to_themselves_at_zero_alpha() {
        for mode in [
            BlendMode::Clear,
            BlendMode::Src,
            BlendMode::Dst,
            BlendMode::SrcOver,
            BlendMode::DstOver,
            BlendMode::DstOut,
            BlendMode::SrcATop,
            BlendMode::Xor,
        ] {
            assert_eq!(mode.resolve(0.0), mode);
        }
    }

    #[test]
    fn collapsed_modes_match_clear_exactly() {
        // The collapse is only valid because these modes produce the cleared
        // pixel whenever the source alpha is 0.
        let zero_src = Pixel::TRANSPARENT;
        for mode in [BlendMode::SrcIn, BlendMode::DstIn, BlendMode::SrcOut, BlendMode::DstATop] {
            for dst in [OPAQUE_GREEN, HALF_WHITE, Pixel::TRANSPARENT] {
                assert_eq!(mode.apply(zero_src, dst), BlendMode::Clear.apply(zero_src, dst));
            }
        }
    }
}
