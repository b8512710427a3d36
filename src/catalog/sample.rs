// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Built-in sample catalog.

use crate::model::Car;

pub(super) fn sample_cars() -> Vec<Car> {
    vec![
        Car {
            id: 1,
            brand: "Toyota".into(),
            model: "Camry".into(),
            year: 2023,
            price: 25000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1621007947382-bb3c3994e3fb?q=80&w=2000".into(),
            description: "The Toyota Camry is a reliable and fuel-efficient sedan with modern features and comfortable seating for five passengers.".into(),
        },
        Car {
            id: 2,
            brand: "Honda".into(),
            model: "Civic".into(),
            year: 2023,
            price: 22000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1606016159991-dfe4f2746ad5?q=80&w=2000".into(),
            description: "The Honda Civic offers excellent fuel economy, a spacious interior, and advanced safety features in a compact sedan package.".into(),
        },
        Car {
            id: 3,
            brand: "Tesla".into(),
            model: "Model 3".into(),
            year: 2023,
            price: 45000,
            fuel_type: "Electric".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1560958089-b8a1929cea89?q=80&w=2000".into(),
            description: "The Tesla Model 3 is an all-electric sedan with impressive range, cutting-edge technology, and zero emissions.".into(),
        },
        Car {
            id: 4,
            brand: "Ford".into(),
            model: "F-150".into(),
            year: 2023,
            price: 35000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 6,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1605893477799-b99e3b8b93fe?q=80&w=2000".into(),
            description: "The Ford F-150 is a versatile and powerful pickup truck with excellent towing capacity and a spacious cabin.".into(),
        },
        Car {
            id: 5,
            brand: "Chevrolet".into(),
            model: "Equinox".into(),
            year: 2023,
            price: 28000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?q=80&w=2000".into(),
            description: "The Chevrolet Equinox is a compact SUV with a comfortable ride, good fuel economy, and plenty of cargo space.".into(),
        },
        Car {
            id: 6,
            brand: "BMW".into(),
            model: "3 Series".into(),
            year: 2023,
            price: 42000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1556189250-72ba954cfc2b?q=80&w=2000".into(),
            description: "The BMW 3 Series is a luxury sedan with sporty handling, premium interior, and advanced technology features.".into(),
        },
        Car {
            id: 7,
            brand: "Audi".into(),
            model: "Q5".into(),
            year: 2023,
            price: 45000,
            fuel_type: "Hybrid".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1606664515524-ed2f786a0bd6?q=80&w=2000".into(),
            description: "The Audi Q5 is a luxury compact SUV with a refined interior, smooth ride, and efficient hybrid powertrain.".into(),
        },
        Car {
            id: 8,
            brand: "Hyundai".into(),
            model: "Tucson".into(),
            year: 2023,
            price: 26000,
            fuel_type: "Hybrid".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1633708640808-c3649557a032?q=80&w=2000".into(),
            description: "The Hyundai Tucson is a stylish compact SUV with a comfortable interior, good fuel economy, and advanced safety features.".into(),
        },
        Car {
            id: 9,
            brand: "Kia".into(),
            model: "Telluride".into(),
            year: 2023,
            price: 33000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 8,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1601362840469-51e4d8d58785?q=80&w=2000".into(),
            description: "The Kia Telluride is a midsize SUV with a spacious interior, comfortable ride, and seating for up to eight passengers.".into(),
        },
        Car {
            id: 10,
            brand: "Mazda".into(),
            model: "CX-5".into(),
            year: 2023,
            price: 27000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1626668893632-6f3a4466d22f?q=80&w=2000".into(),
            description: "The Mazda CX-5 is a compact SUV with upscale interior, engaging driving dynamics, and sleek exterior styling.".into(),
        },
        Car {
            id: 11,
            brand: "Subaru".into(),
            model: "Outback".into(),
            year: 2023,
            price: 28000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1626668893632-6f3a4466d22f?q=80&w=2000".into(),
            description: "The Subaru Outback is a versatile wagon with standard all-wheel drive, rugged capability, and spacious interior.".into(),
        },
        Car {
            id: 12,
            brand: "Volkswagen".into(),
            model: "Tiguan".into(),
            year: 2023,
            price: 26000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 7,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1589148938909-4d241c91320a?q=80&w=2000".into(),
            description: "The Volkswagen Tiguan is a compact SUV with optional third-row seating, refined interior, and smooth ride quality.".into(),
        },
        Car {
            id: 13,
            brand: "Nissan".into(),
            model: "Rogue".into(),
            year: 2023,
            price: 27000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1609521263047-f8f205293f24?q=80&w=2000".into(),
            description: "The Nissan Rogue is a compact SUV with comfortable seating, good fuel economy, and advanced driver assistance features.".into(),
        },
        Car {
            id: 14,
            brand: "Jeep".into(),
            model: "Grand Cherokee".into(),
            year: 2023,
            price: 38000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1612911912304-22e2667d2222?q=80&w=2000".into(),
            description: "The Jeep Grand Cherokee is a midsize SUV with excellent off-road capability, upscale interior, and powerful engine options.".into(),
        },
        Car {
            id: 15,
            brand: "Lexus".into(),
            model: "RX".into(),
            year: 2023,
            price: 48000,
            fuel_type: "Hybrid".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1619405399517-d7fce0f13302?q=80&w=2000".into(),
            description: "The Lexus RX is a luxury midsize SUV with a comfortable ride, hybrid efficiency, and premium interior materials.".into(),
        },
        Car {
            id: 16,
            brand: "Mercedes-Benz".into(),
            model: "GLC".into(),
            year: 2023,
            price: 45000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1549399542-7e8f2e928464?q=80&w=2000".into(),
            description: "The Mercedes-Benz GLC is a luxury compact SUV with elegant styling, refined interior, and advanced technology features.".into(),
        },
        Car {
            id: 17,
            brand: "Volvo".into(),
            model: "XC60".into(),
            year: 2023,
            price: 43000,
            fuel_type: "Hybrid".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1619405399517-d7fce0f13302?q=80&w=2000".into(),
            description: "The Volvo XC60 is a luxury compact SUV with Scandinavian design, exceptional safety features, and available hybrid powertrain.".into(),
        },
        Car {
            id: 18,
            brand: "Porsche".into(),
            model: "Macan".into(),
            year: 2023,
            price: 58000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?q=80&w=2000".into(),
            description: "The Porsche Macan is a luxury compact SUV with sports car-like handling, powerful engines, and premium interior quality.".into(),
        },
        Car {
            id: 19,
            brand: "Land Rover".into(),
            model: "Range Rover Sport".into(),
            year: 2023,
            price: 70000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 5,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1539799139339-50c5fe1e2b1b?q=80&w=2000".into(),
            description: "The Range Rover Sport is a luxury midsize SUV with exceptional off-road capability, opulent interior, and powerful performance.".into(),
        },
        Car {
            id: 20,
            brand: "Acura".into(),
            model: "MDX".into(),
            year: 2023,
            price: 48000,
            fuel_type: "Gasoline".into(),
            seating_capacity: 7,
            transmission: "Automatic".into(),
            image: "https://images.unsplash.com/photo-1549399542-7e8f2e928464?q=80&w=2000".into(),
            description: "The Acura MDX is a luxury midsize SUV with three-row seating, sporty handling, and a well-appointed interior.".into(),
        },
    ]
}
