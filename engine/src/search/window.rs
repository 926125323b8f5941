/// Running `(alpha, beta)` bounds shared by the siblings of one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Window {
    pub const FULL: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };

    #[inline]
    pub fn raise_alpha(&mut self, value: f64) {
        self.alpha = self.alpha.max(value);
    }

    #[inline]
    pub fn lower_beta(&mut self, value: f64) {
        self.beta = self.beta.min(value);
    }

    /// Classic beta cutoff, applied uniformly at MAX and MIN nodes.
    #[inline]
    pub fn is_cutoff(&self) -> bool {
        self.beta <= self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::Window;

    #[test]
    fn full_window_never_cuts_off() {
        assert!(!Window::FULL.is_cutoff());
    }

    #[test]
    fn bounds_only_tighten() {
        let mut window = Window::FULL;
        window.raise_alpha(3.0);
        window.raise_alpha(1.0);
        assert_eq!(window.alpha, 3.0);

        window.lower_beta(5.0);
        window.lower_beta(7.0);
        assert_eq!(window.beta, 5.0);
        assert!(!window.is_cutoff());
    }

    #[test]
    fn crossed_bounds_cut_off() {
        let window = Window {
            alpha: 4.0,
            beta: 4.0,
        };
        assert!(window.is_cutoff());

        let window = Window {
            alpha: 4.0,
            beta: 2.0,
        };
        assert!(window.is_cutoff());
    }
}
