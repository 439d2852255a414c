//! Static itinerary content expressed as data.
//!
//! The original document hardcodes every date, flight, hotel and cost in the
//! view markup. Here the same literals live in one serializable record that a
//! template turns into markup, keeping content separate from the export
//! pipeline.

use serde::{Deserialize, Serialize};

/// A complete itinerary document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub traveller: String,
    pub title: String,
    pub duration: String,
    pub trip: TripDetails,
    pub days: Vec<DayPlan>,
    pub flights: Vec<Flight>,
    pub flight_note: String,
    pub hotels: Vec<HotelBooking>,
    pub hotel_notes: Vec<String>,
    pub services: Vec<ServiceLine>,
    pub inclusions: Vec<Inclusion>,
    pub transfer_policy: String,
    pub activities: Vec<ActivityRow>,
    pub payment: PaymentPlan,
    pub visa: VisaDetails,
    pub company: CompanyInfo,
}

/// Top-level departure/arrival summary row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetails {
    pub departure_from: String,
    pub departure: String,
    pub arrival: String,
    pub destination: String,
    pub travellers: u32,
}

/// One day of the trip with its timed activity blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub label: String,
    pub date: String,
    pub summary: String,
    pub blocks: Vec<ActivityBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityBlock {
    pub time_of_day: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub date: String,
    pub carrier: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelBooking {
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: u32,
    pub name: String,
}

/// Scope-of-service row (service name and its delivery detail)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inclusion {
    pub category: String,
    pub count: u32,
    pub details: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRow {
    pub city: String,
    pub activity: String,
    pub kind: String,
    pub time_required: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub total_amount: String,
    pub total_note: String,
    pub tcs: String,
    pub installments: Vec<Installment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    pub label: String,
    pub amount: String,
    pub due: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisaDetails {
    pub kind: String,
    pub validity: String,
    pub processing_date: String,
}

/// Company footer block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
    pub tagline: String,
}

impl Itinerary {
    /// The hardcoded Vigovia Singapore itinerary
    pub fn sample() -> Self {
        let day_blocks = vec![
            ActivityBlock {
                time_of_day: "Morning".into(),
                details: vec!["Arrive in Singapore. Transfer From Airport To Hotel.".into()],
            },
            ActivityBlock {
                time_of_day: "Afternoon".into(),
                details: vec![
                    "Check Into Your Hotel.".into(),
                    "Visit Marina Bay Sands Sky Park (2-3 Hours)".into(),
                    "Optional: Stroll Along Marina Bay Waterfront Promenade Or Helix Bridge.".into(),
                ],
            },
            ActivityBlock {
                time_of_day: "Evening".into(),
                details: vec![
                    "Explore Gardens By The Bay, Including Super Tree Grove (3-4 Hours)".into(),
                ],
            },
        ];

        let days = (1..=4)
            .map(|n| DayPlan {
                label: format!("Day {}", n),
                date: "27th November".into(),
                summary: "Arrival in Singapore & City Exploration".into(),
                blocks: day_blocks.clone(),
            })
            .collect();

        let flights = (0..3)
            .map(|_| Flight {
                date: "Thu 10 Jan'24".into(),
                carrier: "Fly Air India".into(),
                from: "Delhi (DEL)".into(),
                to: "Singapore (SIN)".into(),
            })
            .collect();

        let hotels = (0..5)
            .map(|_| HotelBooking {
                city: "Singapore".into(),
                check_in: "24/02/2024".into(),
                check_out: "24/02/2024".into(),
                nights: 2,
                name: "Super Townhouse Oak Vashi Formerly Blue Diamond".into(),
            })
            .collect();

        let services = vec![
            ServiceLine {
                service: "Flight Tickets And Hotel Vouchers".into(),
                details: "Delivered 3 Days Post Full Payment".into(),
            },
            ServiceLine {
                service: "Web Check-in".into(),
                details: "Boarding Pass Delivery Via Email/WhatsApp".into(),
            },
            ServiceLine {
                service: "Support".into(),
                details: "Chat Support - Response Time: 4 Hours".into(),
            },
            ServiceLine {
                service: "Cancellation Support".into(),
                details: "Provided".into(),
            },
            ServiceLine {
                service: "Trip Support".into(),
                details: "Response Time: 5 Minutes".into(),
            },
        ];

        let inclusions = vec![
            Inclusion {
                category: "Flight".into(),
                count: 2,
                details: "All Flights Mentioned".into(),
                status: "Awaiting Confirmation".into(),
            },
            Inclusion {
                category: "Tourist Tax".into(),
                count: 2,
                details: "Yotel (Singapore), Oakwood (Sydney), Mercure (Cairns), Novotel (Gold Coast), Holiday Inn (Melbourne)".into(),
                status: "Awaiting Confirmation".into(),
            },
            Inclusion {
                category: "Hotel".into(),
                count: 2,
                details: "Airport To Hotel - Hotel To Attractions - Day Trips If Any".into(),
                status: "Included".into(),
            },
        ];

        let activities = (0..10)
            .map(|_| ActivityRow {
                city: "Rio De Janeiro".into(),
                activity: "Sydney Harbour Cruise & Taronga Zoo".into(),
                kind: "Nature/Sightseeing".into(),
                time_required: "2-3 Hours".into(),
            })
            .collect();

        Itinerary {
            traveller: "Rahul".into(),
            title: "Singapore Itinerary".into(),
            duration: "6 Days 5 Nights".into(),
            trip: TripDetails {
                departure_from: "Kolkata".into(),
                departure: "09/06/2025".into(),
                arrival: "15/06/2025".into(),
                destination: "Singapore".into(),
                travellers: 4,
            },
            days,
            flights,
            flight_note: "Note: All Flights Include Meals, Seat Choice (Excluding XL), And 20kg/25kg Checked Baggage.".into(),
            hotels,
            hotel_notes: vec![
                "All Hotels Are Tentative And Can Be Replaced With Similar.".into(),
                "Breakfast Included For All Hotel Stays.".into(),
                "All Room Will Be As Per Deluxe Category.".into(),
                "A maximum occupancy of 2 people/room is allowed in most hotels.".into(),
            ],
            services,
            inclusions,
            transfer_policy: "Transfer Policy (Refundable Upon Claim): If Any Transfer Is Delayed Beyond 15 Minutes, Customers May Book An App-Based Or Radio Taxi And Claim A Refund For That Specific Leg.".into(),
            activities,
            payment: PaymentPlan {
                total_amount: "Rs 9,00,000".into(),
                total_note: "For 3 Pax (Inclusive Of GST)".into(),
                tcs: "Not Collected".into(),
                installments: vec![
                    Installment {
                        label: "Installment 1".into(),
                        amount: "Rs 3,50,000".into(),
                        due: "Initial Payment".into(),
                    },
                    Installment {
                        label: "Installment 2".into(),
                        amount: "Rs 4,00,000".into(),
                        due: "Post Visa Approval".into(),
                    },
                    Installment {
                        label: "Installment 3".into(),
                        amount: "Remaining".into(),
                        due: "20 Days Before Departure".into(),
                    },
                ],
            },
            visa: VisaDetails {
                kind: "Tourist".into(),
                validity: "30 Days".into(),
                processing_date: "14/06/2025".into(),
            },
            company: CompanyInfo {
                name: "Vigovia Tech Pvt Ltd".into(),
                address: vec![
                    "Registered Office: Hd-109 Cinnabar Hills,".into(),
                    "Links Business Park, Karnataka, India.".into(),
                ],
                phone: "+91-99X9999999".into(),
                email: "Contact@Vigovia.Com".into(),
                tagline: "PLAN.PACK.GO!".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_source_document() {
        let it = Itinerary::sample();
        assert_eq!(it.traveller, "Rahul");
        assert_eq!(it.days.len(), 4);
        assert_eq!(it.flights.len(), 3);
        assert_eq!(it.hotels.len(), 5);
        assert_eq!(it.payment.installments.len(), 3);
        assert_eq!(it.trip.travellers, 4);
    }

    #[test]
    fn sample_round_trips_through_json() {
        let it = Itinerary::sample();
        let json = serde_json::to_string(&it).expect("serialize");
        let back: Itinerary = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.title, it.title);
        assert_eq!(back.days.len(), it.days.len());
    }
}
