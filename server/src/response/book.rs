use crate::controller::Exhaust;
use application::transfer::{BookDetailDto, BookSummaryDto};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::GenreFilter;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookSummaryResponse {
    id: i64,
    title: String,
    author: String,
    genre: String,
}

impl From<BookSummaryDto> for BookSummaryResponse {
    fn from(value: BookSummaryDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            genre: value.genre,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    data: Vec<BookSummaryResponse>,
    genre: String,
    count: usize,
}

impl IntoResponse for BookListResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: i64,
    title: String,
    author: String,
    genre: String,
    number_of_pages: i32,
}

impl From<BookDetailDto> for BookResponse {
    fn from(value: BookDetailDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            genre: value.genre,
            number_of_pages: value.page_count,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug)]
pub struct CreatedBookResponse(BookResponse);

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        let location = format!("/books/{}", self.0.id);
        (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            axum::Json(self.0),
        )
            .into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<()> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<BookDetailDto> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: BookDetailDto) -> Self::To {
        CreatedBookResponse(BookResponse::from(input))
    }
}

impl Exhaust<Option<BookDetailDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDetailDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<(GenreFilter, Vec<BookSummaryDto>)> for BookPresenter {
    type To = BookListResponse;
    fn emit(&self, (genre, books): (GenreFilter, Vec<BookSummaryDto>)) -> Self::To {
        let data = books
            .into_iter()
            .map(BookSummaryResponse::from)
            .collect::<Vec<_>>();
        BookListResponse {
            count: data.len(),
            genre: genre.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::controller::Exhaust;
    use crate::response::BookPresenter;
    use application::transfer::{BookDetailDto, BookSummaryDto};
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;
    use kernel::prelude::entity::GenreFilter;
    use serde_json::{json, Value};

    fn dune() -> BookDetailDto {
        BookDetailDto {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            page_count: 412,
        }
    }

    async fn body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn list_echoes_genre_and_counts() {
        let summary = BookSummaryDto {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
        };
        let response = BookPresenter
            .emit((GenreFilter::from("SCIFI"), vec![summary]))
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body(response).await,
            json!({
                "data": [{"id": 1, "title": "Dune", "author": "Herbert", "genre": "SciFi"}],
                "genre": "SCIFI",
                "count": 1
            })
        );
    }

    #[tokio::test]
    async fn detail_uses_camel_case() {
        let response = BookPresenter.emit(Some(dune())).unwrap().into_response();
        assert_eq!(
            body(response).await,
            json!({
                "id": 1,
                "title": "Dune",
                "author": "Herbert",
                "genre": "SciFi",
                "numberOfPages": 412
            })
        );
    }

    #[tokio::test]
    async fn created_points_at_the_book() {
        let response = BookPresenter.emit(dune()).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/books/1");
        assert_eq!(body(response).await["numberOfPages"], 412);
    }

    #[test]
    fn mutations_answer_no_content() {
        assert_eq!(BookPresenter.emit(()), StatusCode::NO_CONTENT);
    }
}
