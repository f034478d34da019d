mod in_flight;
mod notification;
