//! Turns an [`Itinerary`](crate::itinerary::Itinerary) record into the flat
//! HTML document the rendering pipeline consumes.
//!
//! The output deliberately uses a small vocabulary (`h1`, `h2`, `p`) so the
//! layout pass stays simple; tables are flattened into one paragraph per row
//! with `|`-separated cells.

use crate::itinerary::Itinerary;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_heading(out: &mut String, text: &str) {
    out.push_str(&format!("<h2>{}</h2>\n", escape(text)));
}

fn push_para(out: &mut String, text: &str) {
    out.push_str(&format!("<p>{}</p>\n", escape(text)));
}

fn push_row(out: &mut String, cells: &[&str]) {
    push_para(out, &cells.join(" | "));
}

/// Render the full itinerary document as HTML.
pub fn render_html(it: &Itinerary) -> String {
    let mut out = String::new();
    out.push_str("<html><head><title>");
    out.push_str(&escape(&it.title));
    out.push_str("</title></head>\n<body>\n");

    // Header
    push_para(&mut out, &format!("Hi, {}!", it.traveller));
    out.push_str(&format!("<h1>{}</h1>\n", escape(&it.title)));
    push_para(&mut out, &it.duration);

    // Trip summary table
    push_row(
        &mut out,
        &["Departure From", "Departure", "Arrival", "Destination", "No. Of Travellers"],
    );
    push_row(
        &mut out,
        &[
            &it.trip.departure_from,
            &it.trip.departure,
            &it.trip.arrival,
            &it.trip.destination,
            &it.trip.travellers.to_string(),
        ],
    );

    // Daily itinerary
    for day in &it.days {
        push_heading(&mut out, &format!("{} - {}", day.label, day.date));
        push_para(&mut out, &day.summary);
        for block in &day.blocks {
            push_para(&mut out, &block.time_of_day);
            for detail in &block.details {
                push_para(&mut out, detail);
            }
        }
    }

    // Flight summary
    push_heading(&mut out, "Flight Summary");
    for f in &it.flights {
        push_para(
            &mut out,
            &format!("{} {} From {} To {}.", f.date, f.carrier, f.from, f.to),
        );
    }
    push_para(&mut out, &it.flight_note);

    // Hotel bookings
    push_heading(&mut out, "Hotel Bookings");
    push_row(&mut out, &["City", "Check In", "Check Out", "Nights", "Hotel Name"]);
    for h in &it.hotels {
        push_row(
            &mut out,
            &[&h.city, &h.check_in, &h.check_out, &h.nights.to_string(), &h.name],
        );
    }
    for note in &it.hotel_notes {
        push_para(&mut out, note);
    }

    // Scope of service
    push_heading(&mut out, "Scope Of Service");
    push_row(&mut out, &["Service", "Details"]);
    for s in &it.services {
        push_row(&mut out, &[&s.service, &s.details]);
    }

    // Inclusion summary
    push_heading(&mut out, "Inclusion Summary");
    push_row(&mut out, &["Category", "Count", "Details", "Status / Comments"]);
    for inc in &it.inclusions {
        push_row(
            &mut out,
            &[&inc.category, &inc.count.to_string(), &inc.details, &inc.status],
        );
    }
    push_para(&mut out, &it.transfer_policy);

    // Activity table
    push_heading(&mut out, "Activity Table");
    push_row(&mut out, &["City", "Activity", "Type", "Time Required"]);
    for a in &it.activities {
        push_row(&mut out, &[&a.city, &a.activity, &a.kind, &a.time_required]);
    }

    // Payment plan
    push_heading(&mut out, "Payment Plan");
    push_para(
        &mut out,
        &format!("Total Amount {} {}", it.payment.total_amount, it.payment.total_note),
    );
    push_para(&mut out, &format!("TCS {}", it.payment.tcs));
    push_row(&mut out, &["Installment", "Amount", "Due Date"]);
    for i in &it.payment.installments {
        push_row(&mut out, &[&i.label, &i.amount, &i.due]);
    }

    // Visa details
    push_heading(&mut out, "Visa Details");
    push_row(&mut out, &["Visa Type", "Validity", "Processing Date"]);
    push_row(&mut out, &[&it.visa.kind, &it.visa.validity, &it.visa.processing_date]);

    push_heading(&mut out, "Terms and Conditions");
    push_para(&mut out, "View all terms and conditions");

    // Footer
    push_para(&mut out, &it.company.name);
    for line in &it.company.address {
        push_para(&mut out, line);
    }
    push_para(&mut out, &format!("Phone: {}", it.company.phone));
    push_para(&mut out, &format!("Email ID: {}", it.company.email));
    push_para(&mut out, &it.company.tagline);

    out.push_str("</body></html>\n");
    out
}
