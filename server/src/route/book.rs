use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::DependOnInventory;
use crate::request::{
    book_id, BookTransformer, CreateBookRequest, GetAllBookRequest, GetBookRequest,
    RemoveBookRequest, UpdateBookGenreRequest,
};
use crate::response::{BookPresenter, BookResponse};
use application::service::{
    CreateBookService, GetBookService, RemoveBookService, UpdateBookGenreService,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;

const BOOK_NOT_FOUND: &str = "No book with that id!";

fn book_not_found() -> Response {
    (StatusCode::NOT_FOUND, BOOK_NOT_FOUND).into_response()
}

fn unknown_id(segment: &str) -> ErrorStatus {
    ErrorStatus::from(
        Report::new(KernelError::NotFound)
            .attach_printable(format!("`{segment}` is not a book id")),
    )
}

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<S> BookRouter for Router<S>
where
    S: DependOnInventory,
{
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<S>, Query(req): Query<GetAllBookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            let genre = dto.genre.clone();
                            let books = module.inventory().get_all_books(dto).await?;
                            Ok::<_, Report<KernelError>>((genre, books))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<S>,
                 payload: Result<Json<CreateBookRequest>, JsonRejection>| async move {
                    let Json(req) = payload?;
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.inventory().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<S>, Path(id): Path<String>| async move {
                    let Some(id) = book_id(&id) else {
                        return Ok(book_not_found());
                    };
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.inventory().get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(BookResponse::into_response)
                                .unwrap_or_else(book_not_found)
                        })
                },
            )
            .delete(
                |State(module): State<S>, Path(id): Path<String>| async move {
                    let id = book_id(&id).ok_or_else(|| unknown_id(&id))?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(RemoveBookRequest::new(id))
                        .handle(|dto| async move { module.inventory().remove_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id/genre",
            put(
                |State(module): State<S>,
                 Path(id): Path<String>,
                 payload: Result<Json<String>, JsonRejection>| async move {
                    let id = book_id(&id).ok_or_else(|| unknown_id(&id))?;
                    let Json(genre) = payload?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(UpdateBookGenreRequest::new(id, genre))
                        .handle(|dto| async move {
                            module.inventory().update_book_genre(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
