//! 無限スクロールのトリガー
//!
//! 表示領域の下端と番兵要素の位置だけを見て、近づいたかどうかを判定する。

pub const DEFAULT_ROOT_MARGIN: f64 = 100.0;

/// 表示領域（ドキュメント座標）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollTrigger {
    root_margin: f64,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_MARGIN)
    }
}

impl ScrollTrigger {
    pub fn new(root_margin: f64) -> Self {
        Self {
            root_margin: root_margin.max(0.0),
        }
    }

    /// 番兵の上端が表示領域の下端 + マージン以内にあるか
    pub fn proximity_reached(&self, viewport: Viewport, sentinel_top: f64) -> bool {
        sentinel_top <= viewport.bottom() + self.root_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_margin() {
        let trigger = ScrollTrigger::default();
        let viewport = Viewport { top: 0.0, height: 800.0 };
        assert!(trigger.proximity_reached(viewport, 850.0));
        assert!(trigger.proximity_reached(viewport, 900.0));
        assert!(!trigger.proximity_reached(viewport, 900.5));
    }

    #[test]
    fn test_sentinel_already_visible() {
        let trigger = ScrollTrigger::new(0.0);
        let viewport = Viewport { top: 1000.0, height: 600.0 };
        assert!(trigger.proximity_reached(viewport, 1200.0));
    }

    #[test]
    fn test_negative_margin_is_clamped() {
        let trigger = ScrollTrigger::new(-50.0);
        let viewport = Viewport { top: 0.0, height: 100.0 };
        assert!(trigger.proximity_reached(viewport, 100.0));
    }
}
