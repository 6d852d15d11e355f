//! HTTP client for the school management API.
//!
//! One thin wrapper around `reqwest` that attaches the bearer token when one
//! is present and normalizes every failure into [`ApiError`]. Endpoint
//! methods mirror the backend's routes one to one; cache reconciliation after
//! a mutation lives in the sync layer, not here.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::models::{
    ApproveTeacherRequest, Classroom, Identity, LoginRequest, NewClassroom, NewStudent,
    NewTeacher, RegisterRequest, RegisteredUser, Student, Teacher, TokenResponse,
};

/// Client for the school management REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, attaching the bearer token when present, and map the
    /// three failure classes: transport errors, non-success statuses (with
    /// the server's `detail` when parseable), and undecodable bodies.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        Ok(response)
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.dispatch(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    async fn no_content(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.dispatch(builder).await?;
        Ok(())
    }

    // ---- auth ----

    /// POST /auth/login. On success the returned token is remembered for
    /// subsequent requests; the caller decides whether to persist it.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: TokenResponse = self
            .json(self.http.post(self.url("/auth/login")).json(&body))
            .await?;
        self.token = Some(token.access_token.clone());
        Ok(token)
    }

    /// POST /auth/register.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, ApiError> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.json(self.http.post(self.url("/auth/register")).json(&body))
            .await
    }

    /// GET /api/me — identity and role for the current token.
    pub async fn me(&self) -> Result<Identity, ApiError> {
        self.json(self.http.get(self.url("/api/me"))).await
    }

    // ---- students ----

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.json(self.http.get(self.url("/students"))).await
    }

    pub async fn create_student(&self, student: &NewStudent) -> Result<Student, ApiError> {
        self.json(self.http.post(self.url("/students")).json(student))
            .await
    }

    pub async fn update_student(
        &self,
        id: i64,
        student: &NewStudent,
    ) -> Result<Student, ApiError> {
        self.json(
            self.http
                .put(self.url(&format!("/students/{id}")))
                .json(student),
        )
        .await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.no_content(self.http.delete(self.url(&format!("/students/{id}"))))
            .await
    }

    // ---- teachers ----

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.json(self.http.get(self.url("/teachers"))).await
    }

    pub async fn create_teacher(&self, teacher: &NewTeacher) -> Result<Teacher, ApiError> {
        self.json(self.http.post(self.url("/teachers")).json(teacher))
            .await
    }

    pub async fn update_teacher(
        &self,
        id: i64,
        teacher: &NewTeacher,
    ) -> Result<Teacher, ApiError> {
        self.json(
            self.http
                .put(self.url(&format!("/teachers/{id}")))
                .json(teacher),
        )
        .await
    }

    pub async fn delete_teacher(&self, id: i64) -> Result<(), ApiError> {
        self.no_content(self.http.delete(self.url(&format!("/teachers/{id}"))))
            .await
    }

    /// POST /admin/approve-teacher/{user_id} — promote a registered user to a
    /// teacher, optionally overriding name or email.
    pub async fn approve_teacher(
        &self,
        user_id: i64,
        overrides: &ApproveTeacherRequest,
    ) -> Result<Teacher, ApiError> {
        self.json(
            self.http
                .post(self.url(&format!("/admin/approve-teacher/{user_id}")))
                .json(overrides),
        )
        .await
    }

    // ---- classrooms ----

    pub async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.json(self.http.get(self.url("/classrooms"))).await
    }

    pub async fn create_classroom(&self, classroom: &NewClassroom) -> Result<Classroom, ApiError> {
        self.json(self.http.post(self.url("/classrooms")).json(classroom))
            .await
    }

    pub async fn update_classroom(
        &self,
        id: i64,
        classroom: &NewClassroom,
    ) -> Result<Classroom, ApiError> {
        self.json(
            self.http
                .put(self.url(&format!("/classrooms/{id}")))
                .json(classroom),
        )
        .await
    }

    pub async fn delete_classroom(&self, id: i64) -> Result<(), ApiError> {
        self.no_content(self.http.delete(self.url(&format!("/classrooms/{id}"))))
            .await
    }

    // ---- teacher portal ----

    /// GET /my/classrooms — classrooms assigned to the logged-in teacher.
    pub async fn my_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.json(self.http.get(self.url("/my/classrooms"))).await
    }

    /// GET /my/classrooms/{id}/students.
    pub async fn my_classroom_students(&self, classroom_id: i64) -> Result<Vec<Student>, ApiError> {
        self.json(
            self.http
                .get(self.url(&format!("/my/classrooms/{classroom_id}/students"))),
        )
        .await
    }

    /// POST /my/students — add a student to one of the teacher's own classrooms.
    pub async fn add_my_student(&self, student: &NewStudent) -> Result<Student, ApiError> {
        self.json(self.http.post(self.url("/my/students")).json(student))
            .await
    }

    /// DELETE /my/students/{id}.
    pub async fn delete_my_student(&self, id: i64) -> Result<(), ApiError> {
        self.no_content(self.http.delete(self.url(&format!("/my/students/{id}"))))
            .await
    }
}
