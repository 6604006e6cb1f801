use axum::async_trait;
use hotel_access::{
    application::{create_application, ApplicationMiddleware, ApplicationState},
    repository::{
        self, Enrollment, EnrollmentsRepository, Hotel, HotelWithRooms, HotelsRepository, Room,
        Ticket, TicketStatus, TicketType, TicketsRepository,
    },
    service::{entitlement_service::EntitlementServiceImpl, hotels_service::HotelsServiceImpl},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header};
use mongodb::error::ErrorKind;
use serde_json::json;
use std::sync::{
    atomic::{AtomicBool, AtomicI64, Ordering},
    Arc, Mutex,
};
use time::OffsetDateTime;
use tokio::net::TcpListener;
use uuid::Uuid;

const JWT_SECRET: &[u8] = b"hotel access integration secret";
const JWT_EXP: i64 = 253402210800;

///
/// Database kept in memory that backs every repository of the application
///
#[derive(Default)]
pub struct InMemoryDatabase {
    next_id: AtomicI64,
    unavailable: AtomicBool,
    enrollments: Mutex<Vec<Enrollment>>,
    tickets: Mutex<Vec<Ticket>>,
    hotels: Mutex<Vec<Hotel>>,
    rooms: Mutex<Vec<Room>>,
}

impl InMemoryDatabase {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert_enrollment(&self, user_id: Uuid) -> i64 {
        let id = self.next_id();
        self.enrollments
            .lock()
            .unwrap()
            .push(Enrollment { id, user_id });

        id
    }

    pub fn insert_ticket(&self, enrollment_id: i64, status: &str, includes_hotel: bool) -> i64 {
        let id = self.next_id();
        let ticket_type = TicketType {
            id: self.next_id(),
            name: "Presential".to_string(),
            price: 600,
            is_remote: false,
            includes_hotel,
        };
        self.tickets.lock().unwrap().push(Ticket {
            id,
            enrollment_id,
            status: TicketStatus::from(status.to_string()),
            ticket_type,
        });

        id
    }

    pub fn insert_hotel(&self, name: &str) -> Hotel {
        let id = self.next_id();
        self.insert_hotel_with_id(id, name)
    }

    pub fn insert_hotel_with_id(&self, id: i64, name: &str) -> Hotel {
        let now = now();
        let hotel = Hotel {
            id,
            name: name.to_string(),
            image: format!("https://images.example/{}.jpg", name.to_lowercase()),
            created_at: now,
            updated_at: now,
        };
        self.hotels.lock().unwrap().push(hotel.clone());

        hotel
    }

    pub fn insert_room(&self, hotel_id: i64, name: &str, capacity: i32) -> Room {
        let now = now();
        let room = Room {
            id: self.next_id(),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        self.rooms.lock().unwrap().push(room.clone());

        room
    }

    fn check_available(&self) -> Result<(), repository::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(repository::Error::Mongo(
                ErrorKind::Custom(Arc::new("database is unavailable")).into(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl EnrollmentsRepository for InMemoryDatabase {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Enrollment>, repository::Error> {
        self.check_available()?;

        let enrollment = self
            .enrollments
            .lock()
            .unwrap()
            .iter()
            .find(|enrollment| enrollment.user_id == user_id)
            .cloned();

        Ok(enrollment)
    }
}

#[async_trait]
impl TicketsRepository for InMemoryDatabase {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Ticket>, repository::Error> {
        self.check_available()?;

        let ticket = self
            .tickets
            .lock()
            .unwrap()
            .iter()
            .find(|ticket| ticket.enrollment_id == enrollment_id)
            .cloned();

        Ok(ticket)
    }
}

#[async_trait]
impl HotelsRepository for InMemoryDatabase {
    async fn find_all(&self) -> Result<Vec<Hotel>, repository::Error> {
        self.check_available()?;

        Ok(self.hotels.lock().unwrap().clone())
    }

    async fn find_by_id(&self, hotel_id: i64) -> Result<Option<Hotel>, repository::Error> {
        self.check_available()?;

        let hotel = self
            .hotels
            .lock()
            .unwrap()
            .iter()
            .find(|hotel| hotel.id == hotel_id)
            .cloned();

        Ok(hotel)
    }

    async fn find_with_rooms(
        &self,
        hotel_id: i64,
    ) -> Result<Option<HotelWithRooms>, repository::Error> {
        let Some(hotel) = self.find_by_id(hotel_id).await? else {
            return Ok(None);
        };
        let rooms = self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|room| room.hotel_id == hotel_id)
            .cloned()
            .collect();

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}

pub struct TestApp {
    pub address: String,
    pub database: Arc<InMemoryDatabase>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.address)
    }

    ///
    /// Creates user with enrollment and ticket that gives access to hotels
    ///
    pub fn entitled_user(&self) -> Uuid {
        let user_id = Uuid::new_v4();
        let enrollment_id = self.database.insert_enrollment(user_id);
        self.database.insert_ticket(enrollment_id, "PAID", true);

        user_id
    }
}

///
/// Starts application on a random port.
/// Server runs until the test runtime is dropped.
///
pub async fn spawn_app() -> TestApp {
    let database = Arc::new(InMemoryDatabase::default());

    let entitlement_service =
        EntitlementServiceImpl::new(database.clone(), database.clone());
    let hotels_service = HotelsServiceImpl::new(Arc::new(entitlement_service), database.clone());

    let state = ApplicationState {
        hotels_service: Arc::new(hotels_service),
    };
    let middleware = ApplicationMiddleware::new(
        DecodingKey::from_secret(JWT_SECRET),
        vec![Algorithm::HS256],
    );
    let app = create_application(state, middleware);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    tokio::spawn(async move { axum::serve(listener, app).await });

    TestApp { address, database }
}

pub fn create_jwt(user_id: Uuid) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &json!({ "sub": user_id, "exp": JWT_EXP }),
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .unwrap()
}

fn now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();

    // JSON timestamps carry whole seconds in assertions
    now.replace_nanosecond(0).unwrap_or(now)
}
