use leptos::prelude::*;

/// Five stars, filled up to the rounded rating.
pub fn filled_stars(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.round().clamp(0.0, 5.0) as usize
}

#[component]
pub fn StarRating(
    #[prop(into)] rating: Signal<f64>,
    #[prop(optional)] show_value: bool,
) -> impl IntoView {
    view! {
        <span class="star-rating" title=move || format!("{:.1} / 5", rating.get())>
            {move || {
                let filled = filled_stars(rating.get());
                (0..5)
                    .map(|i| {
                        let class = if i < filled {
                            "star-rating__star star-rating__star--filled"
                        } else {
                            "star-rating__star"
                        };
                        view! { <span class=class>"★"</span> }
                    })
                    .collect_view()
            }}
            {show_value.then(|| view! {
                <span class="star-rating__value">{move || format!("{:.1}", rating.get())}</span>
            })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped_and_rounded() {
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(3.4), 3);
        assert_eq!(filled_stars(3.5), 4);
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f64::NAN), 0);
    }
}
