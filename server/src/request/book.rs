use crate::controller::{Intake, TryIntake};
use application::transfer::{
    CreateBookDto, GetAllBookDto, GetBookDto, RemoveBookDto, UpdateBookGenreDto,
};
use garde::Validate;
use kernel::prelude::entity::GenreFilter;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[garde(required, length(min = 1))]
    title: Option<String>,
    #[garde(required, length(min = 1))]
    author: Option<String>,
    #[garde(required, length(min = 1))]
    genre: Option<String>,
    #[serde(default, deserialize_with = "page_count")]
    #[garde(required, range(min = 1))]
    number_of_pages: Option<i32>,
}

/// Page counts arrive either as JSON numbers or as numeric strings.
fn page_count<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(i32),
        Text(String),
    }

    match Option::<Lenient>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Lenient::Number(value)) => Ok(Some(value)),
        Some(Lenient::Text(text)) => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("`{text}` is not a page count"))),
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllBookRequest {
    #[serde(default)]
    genre: GenreFilter,
}

/// Parses the `{id}` path segment. Anything that is not an integer id
/// addresses no book.
pub fn book_id(segment: &str) -> Option<i64> {
    segment.parse().ok()
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct UpdateBookGenreRequest {
    id: i64,
    genre: String,
}

impl UpdateBookGenreRequest {
    pub fn new(id: i64, genre: String) -> Self {
        Self { id, genre }
    }
}

#[derive(Debug)]
pub struct RemoveBookRequest {
    id: i64,
}

impl RemoveBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = garde::Report;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(CreateBookDto {
            title: input.title.unwrap_or_default(),
            author: input.author.unwrap_or_default(),
            genre: input.genre.unwrap_or_default(),
            page_count: input.number_of_pages.unwrap_or_default(),
        })
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllBookRequest) -> Self::To {
        GetAllBookDto { genre: input.genre }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<UpdateBookGenreRequest> for BookTransformer {
    type To = UpdateBookGenreDto;
    fn emit(&self, input: UpdateBookGenreRequest) -> Self::To {
        UpdateBookGenreDto {
            id: input.id,
            genre: input.genre,
        }
    }
}

impl Intake<RemoveBookRequest> for BookTransformer {
    type To = RemoveBookDto;
    fn emit(&self, input: RemoveBookRequest) -> Self::To {
        RemoveBookDto { id: input.id }
    }
}
