use leptos::prelude::*;

const DOT_COLORS: [&str; 6] = ["#1e6cff", "#39b7ff", "#5ee7ff", "#4fffc1", "#3dff78", "#22e56f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    /// Dot diameters in px, left to right.
    pub fn dots(self) -> [u8; 6] {
        match self {
            LogoSize::Small => [3, 4, 5, 7, 4, 5],
            LogoSize::Medium => [4, 5, 6, 8, 5, 6],
            LogoSize::Large => [5, 6, 8, 10, 6, 8],
        }
    }

    fn class(self) -> &'static str {
        match self {
            LogoSize::Small => "logo logo-sm",
            LogoSize::Medium => "logo logo-md",
            LogoSize::Large => "logo logo-lg",
        }
    }
}

#[component]
pub fn Logo(
    #[prop(optional)] size: LogoSize,
    #[prop(optional)] animated: bool,
) -> impl IntoView {
    view! {
        <div class=size.class() class:animated=animated>
            <div class="logo-dots">
                {size.dots().into_iter().zip(DOT_COLORS).enumerate().map(|(i, (d, color))| view! {
                    <span
                        class="logo-dot"
                        style=format!(
                            "width: {d}px; height: {d}px; background-color: {color}; animation-delay: {:.2}s;",
                            i as f32 * 0.15
                        )
                    ></span>
                }).collect::<Vec<_>>()}
            </div>
            <span class="logo-word gradient-text">{crate::config::BRAND_NAME}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_grow_with_size() {
        let small: u32 = LogoSize::Small.dots().iter().map(|d| u32::from(*d)).sum();
        let medium: u32 = LogoSize::Medium.dots().iter().map(|d| u32::from(*d)).sum();
        let large: u32 = LogoSize::Large.dots().iter().map(|d| u32::from(*d)).sum();
        assert!(small < medium && medium < large);
    }
}
