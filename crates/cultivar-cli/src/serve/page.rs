//! HTML rendering of the prediction form.
use std::collections::HashMap;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use cultivar_classifiers::artifact::FeatureSpec;
use cultivar_classifiers::handler::RequestState;
use cultivar_classifiers::validation::display_name;

const STYLE: &str = "
body {
    font-family: sans-serif;
    background-color: #f7f3f0;
    margin: 0;
    padding: 2rem;
}
main {
    max-width: 40rem;
    margin: 0 auto;
    background: #fff;
    padding: 1.5rem 2rem;
    border-radius: 8px;
}
.field {
    display: grid;
    grid-template-columns: 1fr 10rem;
    gap: 0.25rem 1rem;
    margin-bottom: 0.75rem;
}
.field small {
    grid-column: 1 / span 2;
    color: #666;
}
.result {
    background-color: #e8f5e9;
    padding: 10px;
    border-radius: 5px;
}
.error {
    background-color: #fdecea;
    color: #8a1c1c;
    padding: 10px;
    border-radius: 5px;
}
";

/// Render the whole page: the form for every declared feature, plus either
/// the prediction or the error of the current request.
///
/// `values` holds the raw text of the last submission so the user can fix a
/// single field instead of retyping everything.
pub fn render_page(
    features: &[FeatureSpec],
    values: &HashMap<String, String>,
    state: &RequestState,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Wine Cultivar Predictor" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    h1 { "Wine Cultivar Predictor" }
                    p { "Enter the chemical measurements of a wine sample to predict its cultivar." }
                    form method="post" action="/" {
                        @for spec in features {
                            (feature_field(spec, values.get(&spec.name).map(String::as_str)))
                        }
                        button type="submit" { "Predict" }
                    }
                    @match state {
                        RequestState::Success(label) => {
                            div class="result" {
                                "Predicted: " strong { (label.to_string()) }
                            }
                        }
                        RequestState::Failed(message) => {
                            div class="error" { (message) }
                        }
                        RequestState::AwaitingInput => {}
                    }
                }
            }
        }
    }
}

fn feature_field(spec: &FeatureSpec, value: Option<&str>) -> Markup {
    let label = display_name(&spec.name);
    html! {
        div class="field" {
            label for=(spec.name) { (label) }
            input type="text" inputmode="decimal" id=(spec.name) name=(spec.name)
                value=[value] required;
            small { (format!("Range: {:.2} to {:.2}", spec.bounds.min, spec.bounds.max)) }
        }
    }
}
