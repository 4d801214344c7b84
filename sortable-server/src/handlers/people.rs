use askama::Template;
use axum::{extract::State, http::Uri, response::Html};
use sortable_core::{RenderContext, RequestState, SortDirection, SortState};

use crate::{
    AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PersonField {
    Name,
    Age,
    City,
}

impl PersonField {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(PersonField::Name),
            "age" => Some(PersonField::Age),
            "city" => Some(PersonField::City),
            _ => None,
        }
    }
}

pub fn sample_people() -> Vec<Person> {
    [
        ("Ada Lovelace", 36, "London"),
        ("Grace Hopper", 85, "New York"),
        ("Alan Turing", 41, "Wilmslow"),
        ("Edsger Dijkstra", 72, "Nuenen"),
        ("Barbara Liskov", 84, "Boston"),
    ]
    .into_iter()
    .map(|(name, age, city)| Person {
        name: name.to_string(),
        age,
        city: city.to_string(),
    })
    .collect()
}

/// Orders `people` by the request's `sort`/`dir` parameters. The tags only
/// build links; ordering the rows is the host's job.
fn sort_people(people: &mut [Person], state: &SortState) -> AppResult<()> {
    let Some(field) = state.field.as_deref() else {
        return Ok(());
    };
    let field = PersonField::parse(field)
        .ok_or_else(|| AppError::unknown_sort_field(field))?;

    match field {
        PersonField::Name => people.sort_by(|a, b| a.name.cmp(&b.name)),
        PersonField::Age => people.sort_by_key(|p| p.age),
        PersonField::City => people.sort_by(|a, b| a.city.cmp(&b.city)),
    }
    if state.direction.unwrap_or_default() == SortDirection::Desc {
        people.reverse();
    }
    Ok(())
}

/// Page shell around the compiled header fragment. Row cells go through
/// askama's HTML escaping; `header` is already markup.
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>People</title></head>
<body>
{{ header|safe }}  <tbody>
{%- for person in people %}
    <tr><td>{{ person.name }}</td><td>{{ person.age }}</td><td>{{ person.city }}</td></tr>
{%- endfor %}
  </tbody>
</table>
</body>
</html>
"#,
    ext = "html"
)]
struct PeoplePage<'a> {
    header: &'a str,
    people: &'a [Person],
}

pub async fn people_table(
    State(state): State<AppState>,
    uri: Uri,
) -> AppResult<Html<String>> {
    let request = RequestState::from_parts(uri.path(), uri.query());
    let sort_state = SortState::from_query(request.query());

    let mut people = state.people.as_ref().clone();
    sort_people(&mut people, &sort_state)?;

    let ctx = RenderContext::new(&request, &state.styles)
        .with_variables(&state.variables);

    let header = state.table.render(&ctx);
    let page = PeoplePage {
        header: &header,
        people: &people,
    }
    .render()?;

    tracing::debug!(
        sort = ?sort_state.field,
        rows = people.len(),
        "rendered people table"
    );

    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortable_core::QueryParams;

    fn names(people: &[Person]) -> Vec<&str> {
        people.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_age_descending() {
        let mut people = sample_people();
        let state = SortState::from_query(&QueryParams::parse("sort=age&dir=desc"));

        sort_people(&mut people, &state).unwrap();

        assert_eq!(people[0].age, 85);
        assert_eq!(people[4].age, 36);
    }

    #[test]
    fn missing_dir_sorts_ascending() {
        let mut people = sample_people();
        let state = SortState::from_query(&QueryParams::parse("sort=name"));

        sort_people(&mut people, &state).unwrap();

        assert_eq!(
            names(&people),
            vec![
                "Ada Lovelace",
                "Alan Turing",
                "Barbara Liskov",
                "Edsger Dijkstra",
                "Grace Hopper",
            ]
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut people = sample_people();
        let state = SortState::from_query(&QueryParams::parse("sort=salary"));

        let err = sort_people(&mut people, &state).unwrap_err();
        assert!(
            matches!(err, AppError::UnknownSortField { ref field } if field == "salary")
        );
    }

    #[test]
    fn page_escapes_cells_but_not_the_header() {
        let people = vec![Person {
            name: "<b>Ada & co</b>".into(),
            age: 36,
            city: "London".into(),
        }];
        let page = PeoplePage {
            header: "<table>\n  <thead><tr><th class=\"sort-none sortable-col\"></th></tr></thead>\n",
            people: &people,
        }
        .render()
        .unwrap();

        assert!(page.contains(r#"<th class="sort-none sortable-col">"#));
        assert!(page.contains("&lt;b&gt;Ada &amp; co"));
        assert!(!page.contains("<b>"));
        assert!(page.contains("<td>36</td><td>London</td>"));
    }
}
