use yew::prelude::*;

use crate::data::countries::UniversitySummary;

#[derive(Properties, PartialEq)]
pub struct UniversityCardProps {
    pub uni: UniversitySummary,
    pub on_apply: Callback<()>,
}

#[function_component(UniversityCard)]
pub fn university_card(props: &UniversityCardProps) -> Html {
    let uni = &props.uni;
    let onclick = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(()))
    };

    let place = match (uni.campus_city, uni.location) {
        (Some(city), Some(location)) => format!("{}, {}", city, location),
        (None, Some(location)) => location.to_string(),
        (Some(city), None) => city.to_string(),
        (None, None) => String::new(),
    };

    html! {
        <div class="university-card" {onclick}>
            <div class="university-card-image">
                <img src={uni.university_image} alt={uni.university_name} />
                <div class="university-card-country">{ uni.country }</div>
            </div>
            <div class="university-card-body">
                <h3>{ uni.university_name }</h3>
                <p class="university-card-program">{ uni.program_name }</p>
                if !place.is_empty() {
                    <p class="university-card-place">{ place }</p>
                }
                <div class="university-card-meta">
                    { format!("{} • {}", uni.degree_level, uni.duration) }
                </div>
                <div class="university-card-tags">
                    { for uni.tags().into_iter().map(|tag| html! {
                        <span class="university-card-tag">{ tag }</span>
                    }) }
                </div>
                <div class="university-card-footer">
                    <div>
                        <p class="university-card-tuition">{ uni.tuition_first_year }</p>
                        <p class="university-card-tuition-label">{ "First Year" }</p>
                    </div>
                    <button class="apply-button">{ "Apply Now →" }</button>
                </div>
            </div>
        </div>
    }
}
